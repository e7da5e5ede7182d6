use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::cycle::{BrowserScheduler, SubmissionCycle};
use crate::booking::form::{BookingAction, BookingState, Field, ServiceKind};
use crate::booking::sink::ConsoleSink;
use crate::config::use_site_config;
use crate::icons::{Icon, SvgIcon};

const CONTACT_CSS: &str = r#"
    .contact-card {
        background: #f8fafc;
        border-radius: 48px;
        overflow: hidden;
        border: 1px solid #f1f5f9;
        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
        display: grid;
    }
    .contact-info, .booking-panel { padding: 3rem; }
    .booking-panel { background: #fff; border-left: 1px solid #f1f5f9; }
    .contact-info > p { color: #475569; margin-bottom: 3rem; }
    .contact-rows { display: flex; flex-direction: column; gap: 2rem; }
    .contact-row { display: flex; align-items: flex-start; gap: 1rem; }
    .contact-row-icon {
        background: rgba(37, 99, 235, 0.1);
        color: #2563eb;
        padding: 0.75rem;
        border-radius: 0.75rem;
        display: flex;
    }
    .contact-row-icon .icon { width: 1.5rem; height: 1.5rem; }
    .contact-row-label {
        font-size: 0.875rem;
        font-weight: 700;
        color: #0f172a;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-bottom: 0.25rem;
    }
    .contact-row-value {
        display: block;
        font-size: 1.25rem;
        font-weight: 500;
        color: #475569;
        text-decoration: none;
        margin: 0;
    }
    a.contact-row-value:hover { color: #2563eb; }
    .booking-panel h3 { font-size: 1.5rem; color: #0f172a; margin: 0 0 1.5rem; }
    .booking-form { display: flex; flex-direction: column; gap: 1rem; }
    .form-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .form-field { display: flex; flex-direction: column; gap: 0.25rem; }
    .form-field label {
        font-size: 0.75rem;
        font-weight: 700;
        color: #64748b;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin-left: 0.25rem;
    }
    .form-field input, .form-field select {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        background: #f8fafc;
        border: 1px solid #e2e8f0;
        font: inherit;
        outline: none;
        appearance: none;
        transition: all 0.2s;
    }
    .form-field input:focus, .form-field select:focus {
        border-color: #3b82f6;
        box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.2);
    }
    .booking-submit {
        margin-top: 1rem;
        width: 100%;
        padding: 1rem;
        border: none;
        border-radius: 0.75rem;
        background: #2563eb;
        color: #fff;
        font: inherit;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.2);
    }
    .booking-submit:hover { background: #1d4ed8; }
    .booking-submit .icon { width: 1.25rem; height: 1.25rem; }
    .booking-sent {
        background: #ecfdf5;
        border: 1px solid #d1fae5;
        padding: 2rem;
        border-radius: 1.5rem;
        text-align: center;
        animation: popIn 0.3s ease-out;
    }
    .booking-sent .icon { width: 3rem; height: 3rem; color: #10b981; margin-bottom: 1rem; }
    .booking-sent h4 { font-size: 1.25rem; color: #064e3b; margin: 0 0 0.5rem; }
    .booking-sent p { color: #047857; margin: 0; }
    @keyframes popIn {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
    @media (min-width: 768px) {
        .contact-card { grid-template-columns: 1fr 1fr; }
        .contact-info, .booking-panel { padding: 4rem; }
    }
"#;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_site_config();
    let booking = use_reducer(BookingState::default);
    let cycle = use_mut_ref(|| SubmissionCycle::new(BrowserScheduler));

    // No reset may fire into a form that has been torn down.
    {
        let cycle = cycle.clone();
        use_effect_with_deps(move |_| {
            move || {
                cycle.borrow_mut().cancel();
            }
        }, ());
    }

    let onsubmit = {
        let booking = booking.clone();
        let cycle = cycle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = booking.form.validate() {
                log::warn!("Booking not submitted: {}", err);
                return;
            }
            let dispatcher = booking.dispatcher();
            cycle
                .borrow_mut()
                .submit(&booking.form, &ConsoleSink, move |action| dispatcher.dispatch(action));
        })
    };

    let oninput = {
        let booking = booking.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.name().parse::<Field>() {
                Ok(field) => booking.dispatch(BookingAction::Update(field, input.value())),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let onchange_service = {
        let booking = booking.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            booking.dispatch(BookingAction::Update(Field::Service, select.value()));
        })
    };

    let form = &booking.form;

    html! {
        <section id="contact" class="section">
            <style>{CONTACT_CSS}</style>
            <div class="container">
                <div class="contact-card">
                    <div class="contact-info">
                        <h2 class="section-title">{"Get in Touch"}</h2>
                        <p>
                            {"Need a plumber? Send us a message or give us a call. We're ready to help you with any plumbing issue."}
                        </p>

                        <div class="contact-rows">
                            <div class="contact-row">
                                <div class="contact-row-icon"><SvgIcon icon={Icon::Phone} /></div>
                                <div>
                                    <div class="contact-row-label">{"Call Us"}</div>
                                    <a href={config.tel_href()} class="contact-row-value">{config.phone.display.clone()}</a>
                                </div>
                            </div>
                            <div class="contact-row">
                                <div class="contact-row-icon"><SvgIcon icon={Icon::MapPin} /></div>
                                <div>
                                    <div class="contact-row-label">{"Location"}</div>
                                    <a
                                        href={config.maps_href()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="contact-row-value"
                                    >
                                        {config.location_label()}
                                    </a>
                                </div>
                            </div>
                            <div class="contact-row">
                                <div class="contact-row-icon"><SvgIcon icon={Icon::Clock} /></div>
                                <div>
                                    <div class="contact-row-label">{"Hours"}</div>
                                    <p class="contact-row-value">{config.hours.clone()}</p>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="booking-panel">
                        <h3>{"Book an Appointment"}</h3>
                        {
                            if booking.submitted {
                                html! {
                                    <div class="booking-sent" role="status">
                                        <SvgIcon icon={Icon::CheckCircle} />
                                        <h4>{"Request Sent!"}</h4>
                                        <p>{"We'll contact you shortly to confirm your booking."}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <form class="booking-form" {onsubmit}>
                                        <div class="form-pair">
                                            <div class="form-field">
                                                <label for="booking-name">{"Name"}</label>
                                                <input
                                                    id="booking-name"
                                                    required={true}
                                                    type="text"
                                                    name="name"
                                                    value={form.name.clone()}
                                                    oninput={oninput.clone()}
                                                    placeholder="John Doe"
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="booking-phone">{"Phone"}</label>
                                                <input
                                                    id="booking-phone"
                                                    required={true}
                                                    type="tel"
                                                    name="phone"
                                                    value={form.phone.clone()}
                                                    oninput={oninput.clone()}
                                                    placeholder={config.phone.display.clone()}
                                                />
                                            </div>
                                        </div>
                                        <div class="form-field">
                                            <label for="booking-email">{"Email"}</label>
                                            <input
                                                id="booking-email"
                                                required={true}
                                                type="email"
                                                name="email"
                                                value={form.email.clone()}
                                                oninput={oninput.clone()}
                                                placeholder="john@example.com"
                                            />
                                        </div>
                                        <div class="form-pair">
                                            <div class="form-field">
                                                <label for="booking-date">{"Preferred Date"}</label>
                                                <input
                                                    id="booking-date"
                                                    required={true}
                                                    type="date"
                                                    name="date"
                                                    value={form.date.clone()}
                                                    oninput={oninput}
                                                />
                                            </div>
                                            <div class="form-field">
                                                <label for="booking-service">{"Service"}</label>
                                                <select id="booking-service" name="service" onchange={onchange_service}>
                                                    { for ServiceKind::ALL.iter().map(|kind| html! {
                                                        <option
                                                            key={kind.label()}
                                                            value={kind.label()}
                                                            selected={*kind == form.service}
                                                        >
                                                            {kind.label()}
                                                        </option>
                                                    }) }
                                                </select>
                                            </div>
                                        </div>
                                        <button type="submit" class="booking-submit">
                                            {"Request Appointment"}
                                            <SvgIcon icon={Icon::ArrowRight} />
                                        </button>
                                    </form>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

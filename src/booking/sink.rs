use super::form::BookingForm;

/// Receives the form snapshot at the moment of submission.
pub trait SubmissionSink {
    fn record(&self, snapshot: &BookingForm);
}

/// Writes submissions to the browser console. Nothing leaves the page.
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn record(&self, snapshot: &BookingForm) {
        match serde_wasm_bindgen::to_value(snapshot) {
            Ok(value) => gloo_console::log!("Form submitted:", value),
            Err(err) => log::warn!("Could not convert booking snapshot: {}", err),
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) snapshots: RefCell<Vec<BookingForm>>,
    }

    impl SubmissionSink for RecordingSink {
        fn record(&self, snapshot: &BookingForm) {
            self.snapshots.borrow_mut().push(snapshot.clone());
        }
    }
}

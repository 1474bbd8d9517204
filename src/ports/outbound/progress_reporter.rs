/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress and warning output (e.g., to stderr)
/// so it never mixes with the report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Marks the start of a blocking step (such as an API request)
    fn start_waiting(&self, message: &str);

    /// Marks the end of the step started with [`ProgressReporter::start_waiting`]
    fn finish_waiting(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_waiting(&self, message: &str) {
        (**self).start_waiting(message)
    }

    fn finish_waiting(&self) {
        (**self).finish_waiting()
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}

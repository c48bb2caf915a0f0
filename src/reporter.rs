pub trait Reporter: Clone + Send + Sync {
    fn send(&self, case: Case);
}

pub trait Progress: Reporter {
    fn set_message(&self, message: String) {
        self.send(Case::SetMessage(message))
    }
    fn set_max_progress(&self, value: f64) {
        self.send(Case::SetMaxProgress(value));
    }
    fn set_progress(&self, value: f64) {
        self.send(Case::SetProgress(value));
    }
}

impl<R: Reporter> Progress for R {}

/// No reporter.
pub const NR: Option<()> = None;

impl Reporter for () {
    fn send(&self, _case: Case) {}
}

impl<R: Reporter> Reporter for Option<R> {
    fn send(&self, case: Case) {
        if let Some(s) = &self {
            s.send(case);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Case {
    SetMessage(String),
    SetMaxProgress(f64),
    SetProgress(f64),
}

pub(crate) mod progress;

pub(crate) use progress::Progress;

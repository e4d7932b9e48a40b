/// Toast-style status lines. These go to stderr so exported keys and
/// tables stay clean on stdout.
pub enum NotifyTone {
    Success,
    Error,
}

pub fn notify(message: &str, tone: NotifyTone) {
    match tone {
        NotifyTone::Success => eprintln!("{message}"),
        NotifyTone::Error => eprintln!("error: {message}"),
    }
}

use actix_session::Session;

const AUTHENTICATED_KEY: &str = "authenticated";

/// Whether the session has passed the gate.
pub fn is_authenticated(session: &Session) -> bool {
    session
        .get::<bool>(AUTHENTICATED_KEY)
        .unwrap_or(None)
        .unwrap_or(false)
}

/// Mark the session as authenticated after a successful gate check.
pub fn grant(session: &Session) {
    let _ = session.insert(AUTHENTICATED_KEY, true);
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub mod ask;
pub mod play;
pub mod sample;

use m8_oracle::{BallConfig, Session};

/// Build a session for a command, mapping configuration errors to text.
fn open_session(config: BallConfig) -> Result<Session, String> {
    Session::new(config).map_err(|e| format!("failed to start session: {e}"))
}

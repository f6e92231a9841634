use crate::cli::actions::Action;
use crate::workerhub::new;
use anyhow::Result;

/// Handle the server action
/// # Errors
/// Returns an error if the server fails to start.
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            new(port, dsn).await?;
        }
    }

    Ok(())
}

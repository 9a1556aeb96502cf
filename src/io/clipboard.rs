use anyhow::Result;
use cli_clipboard::{ClipboardContext, ClipboardProvider};

/// Copy text to clipboard, warning on failure if `fail_hard` is false.
pub fn copy_to_clipboard(
    text: &str,
    fail_hard: bool,
) -> Result<()> {
    let mut ctx = match ClipboardContext::new() {
        Ok(c) => c,
        Err(e) => {
            if fail_hard {
                return Err(anyhow::anyhow!("Clipboard init failed: {:?}", e));
            }
            tracing::warn!("Clipboard unavailable: {:?}", e);
            return Ok(());
        }
    };
    if let Err(e) = ctx.set_contents(text.to_string()) {
        if fail_hard {
            return Err(anyhow::anyhow!("Clipboard copy failed: {:?}", e));
        }
        tracing::warn!("Clipboard copy failed: {:?}", e);
        return Ok(());
    }
    tracing::info!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

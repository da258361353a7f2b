// std imports
use std::io;

// ---

/// Enables processing of ANSI escape sequences in the Windows console.
#[cfg(windows)]
pub fn enable_ansi_support() -> io::Result<()> {
    let mut console = winapi_util::console::Console::stdout()?;
    console.set_virtual_terminal_processing(true)
}

#[cfg(not(windows))]
pub fn enable_ansi_support() -> io::Result<()> {
    Ok(())
}

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("Data cannot be null")]
    InvalidArgument,
}

/// Validate and echo a data payload.
///
/// An absent payload is rejected before anything is written. A present
/// payload, including the empty string, is echoed to stdout as a single
/// `Processing: <data>` line. Stateless; repeated calls with the same
/// payload produce the same line each time.
pub fn process(data: Option<&str>) -> Result<(), ProcessError> {
    let line = render_line(data)?;
    println!("{line}");
    Ok(())
}

fn render_line(data: Option<&str>) -> Result<String, ProcessError> {
    let data = data.ok_or(ProcessError::InvalidArgument)?;
    Ok(format!("Processing: {data}"))
}

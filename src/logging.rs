use crate::errors::{EllaError, EllaResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts file logging. The terminal owns stdout, so everything goes to
/// `ella.log` in the working directory. The returned handle must stay alive
/// for the lifetime of the program.
pub fn init_logging(level: &str) -> EllaResult<LoggerHandle> {
    let handle = Logger::try_with_str(level)
        .map_err(|e| EllaError::Logging(format!("invalid log spec: {}", e)))?
        .log_to_file(FileSpec::default().basename("ella").suppress_timestamp())
        .start()
        .map_err(|e| EllaError::Logging(format!("failed to start logger: {}", e)))?;

    Ok(handle)
}

use std::process::{Child, Command, Stdio};

use eyespeak_common::{EyespeakError, Result};
use eyespeak_config::schema::{SpeechBackend, SpeechConfig};

/// Where composed sentences are spoken.
pub trait SpeechSink {
    /// Start speaking `text`, interrupting anything already in progress.
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Stop speaking. Stopping while silent is not an error.
    fn stop(&mut self) -> Result<()>;
}

/// Build the sink selected by `[speech] backend`.
pub fn sink_from_config(config: &SpeechConfig) -> Box<dyn SpeechSink> {
    match config.backend {
        SpeechBackend::Log => Box::new(LogSpeechSink),
        SpeechBackend::Command => Box::new(CommandSpeechSink::new(
            config.command.clone(),
            config.args.clone(),
        )),
    }
}

/// Writes sentences to the log instead of speaking them.
#[derive(Debug, Default)]
pub struct LogSpeechSink;

impl SpeechSink for LogSpeechSink {
    fn speak(&mut self, text: &str) -> Result<()> {
        tracing::info!("speak: {text}");
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        tracing::info!("speech stopped");
        Ok(())
    }
}

/// Runs an external text-to-speech program with the sentence as its
/// last argument.
#[derive(Debug)]
pub struct CommandSpeechSink {
    program: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl CommandSpeechSink {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            child: None,
        }
    }

    /// Whether the last spawned program is still running. Reaps it if not.
    fn is_speaking(&mut self) -> bool {
        match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_))) | Some(Err(_)) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

impl SpeechSink for CommandSpeechSink {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.stop()?;
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| EyespeakError::Speech(format!("failed to run {}: {e}", self.program)))?;
        tracing::debug!("speaking via {} (pid {})", self.program, child.id());
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if !self.is_speaking() {
            return Ok(());
        }
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        tracing::debug!("killing speech process {}", child.id());
        child.kill()?;
        child.wait()?;
        Ok(())
    }
}

impl Drop for CommandSpeechSink {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::warn!("failed to stop speech process: {e}");
        }
    }
}

//! Delegation to the external `markitdown` CLI
//!
//! No conversion logic lives here: the binary does all format sniffing and
//! Markdown generation. This module only builds the invocation, feeds it the
//! uploaded bytes (stdin or a transient on-disk copy), and collects stdout.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use uuid::Uuid;

use super::{ConversionResult, Converter, SourceFile};
use crate::config::{ConverterConfig, DeliveryMode};
use crate::error::{Error, Result};

/// Converter backed by the `markitdown` command-line tool
pub struct MarkItDownCli {
    config: ConverterConfig,
}

impl MarkItDownCli {
    /// Create a new converter, probing that the binary is available.
    ///
    /// A failed probe is a startup failure: the service records the
    /// converter as absent and every conversion request fails fast.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        let probe = std::process::Command::new(&config.binary)
            .arg("--version")
            .output();

        match probe {
            Ok(output) if output.status.success() => Ok(Self { config }),
            Ok(output) => Err(Error::config(format!(
                "'{} --version' exited with {}: {}",
                config.binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
            Err(e) => Err(Error::config(format!(
                "Converter binary '{}' is not available: {}",
                config.binary, e
            ))),
        }
    }

    /// Static option flags shared by both delivery modes
    fn option_args(&self, keep_data_uris: bool) -> Vec<String> {
        let mut args = Vec::new();

        if keep_data_uris {
            args.push("--keep-data-uris".to_string());
        }
        if self.config.enable_plugins {
            args.push("--use-plugins".to_string());
        }
        if let Some(endpoint) = &self.config.docintel_endpoint {
            args.push("--use-docintel".to_string());
            args.push("--endpoint".to_string());
            args.push(endpoint.clone());
        }

        args
    }

    /// Unique name for the transient on-disk copy, carrying the original
    /// extension as a hint for the converter
    fn temp_input_name(file: &SourceFile) -> String {
        format!(
            "{}{}",
            Uuid::new_v4(),
            file.extension_hint().unwrap_or_default()
        )
    }

    /// Pipe bytes over stdin with an extension hint
    async fn convert_stream(&self, file: &SourceFile, keep_data_uris: bool) -> Result<String> {
        let mut command = Command::new(&self.config.binary);
        if let Some(hint) = file.extension_hint() {
            command.arg("--extension").arg(hint);
        }
        command
            .args(self.option_args(keep_data_uris))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| {
            Error::conversion(format!("failed to spawn '{}': {}", self.config.binary, e))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::conversion("failed to open converter stdin"))?;

        // Write stdin while draining stdout/stderr. Writing first and
        // collecting later deadlocks once the pipe buffers fill: the
        // converter blocks emitting output, we block feeding input.
        let content = file.content.clone();
        let writer = async move {
            stdin.write_all(&content).await?;
            // Close stdin so the converter sees EOF
            stdin.shutdown().await
        };

        let exchange = async {
            let (write_result, output) = tokio::join!(writer, child.wait_with_output());
            // A converter that exits before consuming all input reports its
            // failure through the exit status, not the broken pipe
            match write_result {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(Error::conversion(format!(
                        "failed to write upload to converter: {}",
                        e
                    )));
                }
            }
            output.map_err(|e| Error::conversion(format!("converter did not complete: {}", e)))
        };

        let limit = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(limit, exchange).await {
            Ok(result) => result?,
            Err(_) => return Err(self.timeout_error()),
        };

        self.collect_output(output)
    }

    /// Write the upload under a per-request temporary directory
    async fn write_temp_input(
        &self,
        file: &SourceFile,
    ) -> Result<(tempfile::TempDir, std::path::PathBuf)> {
        let temp_dir = tempfile::tempdir()?;
        let input_path = temp_dir.path().join(Self::temp_input_name(file));
        tokio::fs::write(&input_path, &file.content).await?;
        Ok((temp_dir, input_path))
    }

    /// Write a transient on-disk copy and pass its path
    async fn convert_via_temp_file(&self, file: &SourceFile, keep_data_uris: bool) -> Result<String> {
        // The directory is removed when this function returns, on every path
        let (temp_dir, input_path) = self.write_temp_input(file).await?;

        let mut command = Command::new(&self.config.binary);
        command
            .arg(&input_path)
            .args(self.option_args(keep_data_uris))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|e| {
            Error::conversion(format!("failed to spawn '{}': {}", self.config.binary, e))
        })?;

        let result = self.wait(child).await;
        if let Err(e) = temp_dir.close() {
            tracing::warn!("Failed to remove temp dir: {}", e);
        }
        result
    }

    /// Wait for the converter with the configured timeout and collect stdout
    async fn wait(&self, child: tokio::process::Child) -> Result<String> {
        let limit = Duration::from_secs(self.config.timeout_secs);
        let output = match timeout(limit, child.wait_with_output()).await {
            Ok(result) => result
                .map_err(|e| Error::conversion(format!("converter did not complete: {}", e)))?,
            Err(_) => return Err(self.timeout_error()),
        };

        self.collect_output(output)
    }

    fn timeout_error(&self) -> Error {
        Error::conversion(format!(
            "conversion timed out after {}s",
            self.config.timeout_secs
        ))
    }

    /// Map exit status and stdout to the conversion result
    fn collect_output(&self, output: std::process::Output) -> Result<String> {
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::conversion(format!(
                "{} exited with {}: {}",
                self.config.binary,
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::conversion(format!("converter produced invalid UTF-8: {}", e)))
    }
}

#[async_trait]
impl Converter for MarkItDownCli {
    async fn convert(&self, file: &SourceFile, keep_data_uris: bool) -> Result<ConversionResult> {
        let markdown = match self.config.mode {
            DeliveryMode::Stream => self.convert_stream(file, keep_data_uris).await?,
            DeliveryMode::TempFile => self.convert_via_temp_file(file, keep_data_uris).await?,
        };

        Ok(ConversionResult { markdown })
    }
}

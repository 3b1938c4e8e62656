use std::fs;
use std::process::Command;

/// Outcome of one export request. A missing region is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    Dispatched,
    SkippedNoRegion,
}

/// Failures inside the spooler itself. They never surface as an exporter
/// state: the export call returns and the console stays as it was.
#[derive(Debug, thiserror::Error)]
pub enum SpoolError {
    #[error("could not stage the print document: {0}")]
    Io(#[from] std::io::Error),
    #[error("print command '{command}' exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// Outbound seam for handing a finished document to the platform print
/// facility, so the export flow can be exercised without a printer.
pub trait PrintSpooler: Send + Sync {
    fn dispatch(&self, document: &str) -> Result<(), SpoolError>;
}

/// Stages the document in a temp file and invokes the configured print
/// command on it, then removes the file.
#[derive(Debug, Clone)]
pub struct SystemSpooler {
    command: String,
}

impl SystemSpooler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl PrintSpooler for SystemSpooler {
    fn dispatch(&self, document: &str) -> Result<(), SpoolError> {
        let path = std::env::temp_dir().join(format!("roster-print-{}.html", std::process::id()));
        fs::write(&path, document)?;

        let status = Command::new(&self.command).arg(&path).status();
        let _ = fs::remove_file(&path);

        let status = status?;
        if !status.success() {
            return Err(SpoolError::CommandFailed {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Wraps a rendered table region into a standalone document and hands it
/// to the spooler. The region is borrowed immutably for the whole
/// operation, so no roster data or filter state can change as a side
/// effect of exporting, whether the print is confirmed, canceled, or the
/// spooler fails.
#[derive(Debug)]
pub struct PrintExporter<S> {
    spooler: S,
}

impl<S: PrintSpooler> PrintExporter<S> {
    pub fn new(spooler: S) -> Self {
        Self { spooler }
    }

    /// `None` means the table region was never rendered: silent no-op.
    pub fn export(&self, region: Option<&str>) -> Result<PrintOutcome, SpoolError> {
        let Some(table) = region else {
            return Ok(PrintOutcome::SkippedNoRegion);
        };

        self.spooler.dispatch(&printable_document(table))?;
        Ok(PrintOutcome::Dispatched)
    }
}

/// Title-less standalone document: only the region plus the layout rules
/// needed to render borders and header shading in the print dialog.
pub fn printable_document(region: &str) -> String {
    format!(
        "<html>\n<head>\n<style>\n\
         table {{ width: 100%; border-collapse: collapse; }}\n\
         th, td {{ border: 1px solid #ddd; padding: 8px; }}\n\
         th {{ background-color: #f2f2f2; }}\n\
         </style>\n</head>\n<body>\n{region}</body>\n</html>\n"
    )
}

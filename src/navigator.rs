//! Host navigation strategy.
//!
//! The registry never opens anything itself. Browse handlers talk to a
//! [`Navigator`], which the host application supplies.

use crate::{Error, Result};
use std::fmt;
use std::process::Command;
use tracing::debug;

/// Display-placement hint forwarded to the host's window management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    SameWindow,
    OtherWindow,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::SameWindow => f.write_str("same window"),
            Placement::OtherWindow => f.write_str("other window"),
        }
    }
}

/// Strategy for performing navigation side effects on behalf of browse handlers.
pub trait Navigator {
    /// Opens a URL with the environment's default handler.
    fn open_url(&mut self, url: &str, placement: Placement) -> Result<()>;

    /// Shows `node` of the Info manual `manual` ("Top" is the entry node).
    fn goto_info_node(&mut self, manual: &str, node: &str, placement: Placement) -> Result<()>;

    /// Shows a system manual page, optionally restricted to a section.
    fn open_man_page(
        &mut self,
        name: &str,
        section: Option<&str>,
        placement: Placement,
    ) -> Result<()>;
}

/// Navigator backed by the desktop browser and the `info`/`man` programs.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

impl SystemNavigator {
    fn run(mut command: Command) -> Result<()> {
        let status = command
            .status()
            .map_err(|e| Error::Launch(format!("{:?}: {}", command, e)))?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::Launch(format!("{:?} exited with {}", command, status)))
        }
    }
}

impl Navigator for SystemNavigator {
    fn open_url(&mut self, url: &str, placement: Placement) -> Result<()> {
        // The desktop browser decides where new pages go.
        debug!(url, %placement, "opening url");
        webbrowser::open(url).map_err(|e| Error::Launch(format!("{}: {}", url, e)))
    }

    fn goto_info_node(&mut self, manual: &str, node: &str, placement: Placement) -> Result<()> {
        debug!(manual, node, %placement, "opening info node");
        let mut command = Command::new("info");
        command.arg(format!("({}){}", manual, node));
        Self::run(command)
    }

    fn open_man_page(
        &mut self,
        name: &str,
        section: Option<&str>,
        placement: Placement,
    ) -> Result<()> {
        debug!(name, section, %placement, "opening man page");
        let mut command = Command::new("man");
        if let Some(section) = section {
            command.arg(section);
        }
        command.arg(name);
        Self::run(command)
    }
}

/// A navigation request captured by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Url {
        url: String,
        placement: Placement,
    },
    InfoNode {
        manual: String,
        node: String,
        placement: Placement,
    },
    ManPage {
        name: String,
        section: Option<String>,
        placement: Placement,
    },
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::Url { url, placement } => write!(f, "open {} [{}]", url, placement),
            Navigation::InfoNode {
                manual,
                node,
                placement,
            } => write!(f, "info ({}){} [{}]", manual, node, placement),
            Navigation::ManPage {
                name,
                section: Some(section),
                placement,
            } => write!(f, "man {} {} [{}]", section, name, placement),
            Navigation::ManPage {
                name,
                section: None,
                placement,
            } => write!(f, "man {} [{}]", name, placement),
        }
    }
}

/// Navigator that records requests instead of performing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub visits: Vec<Navigation>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn open_url(&mut self, url: &str, placement: Placement) -> Result<()> {
        self.visits.push(Navigation::Url {
            url: url.to_string(),
            placement,
        });
        Ok(())
    }

    fn goto_info_node(&mut self, manual: &str, node: &str, placement: Placement) -> Result<()> {
        self.visits.push(Navigation::InfoNode {
            manual: manual.to_string(),
            node: node.to_string(),
            placement,
        });
        Ok(())
    }

    fn open_man_page(
        &mut self,
        name: &str,
        section: Option<&str>,
        placement: Placement,
    ) -> Result<()> {
        self.visits.push(Navigation::ManPage {
            name: name.to_string(),
            section: section.map(str::to_string),
            placement,
        });
        Ok(())
    }
}

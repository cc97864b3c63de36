use std::fmt;

use crate::error::QueryError;
use crate::layout::SectionId;

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Lines(Vec<String>),
    /// The source failed; holds the single error line shown instead of data.
    Failed(String),
}

/// A titled block of report lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub body: SectionBody,
}

impl Section {
    pub fn new(id: SectionId, lines: Vec<String>) -> Self {
        Self {
            id,
            body: SectionBody::Lines(lines),
        }
    }

    pub fn failed(id: SectionId, err: &QueryError) -> Self {
        Self {
            id,
            body: SectionBody::Failed(format!("{} info retrieval failed: {}", id, err)),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.body, SectionBody::Failed(_))
    }

    /// Body lines, without the title.
    pub fn lines(&self) -> &[String] {
        match &self.body {
            SectionBody::Lines(lines) => lines,
            SectionBody::Failed(line) => std::slice::from_ref(line),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id.header())?;
        for line in self.lines() {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// One full telemetry report. Sections render newline-joined, separated
/// by one blank line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn failed_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_failed()).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

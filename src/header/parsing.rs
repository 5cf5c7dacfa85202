//! Header section parsing
use std::iter::Peekable;

use crate::{
    error::Error,
    fields::{extract_obs_types, header_content, OBSERVABLE_FIRST_CHARS},
    header::{Header, ObsTypesLabel, HEADER_END_MARKER},
    is_rinex_comment,
    version::{is_rinex_v3, Revision, Version, VERSION_LABEL},
};

#[cfg(feature = "log")]
use log::{debug, warn};

/// Parses the declared number of observables: first field of the content.
fn parse_declared_count(content: &str) -> i64 {
    content
        .split_ascii_whitespace()
        .next()
        .and_then(|field| field.parse::<i64>().ok())
        .unwrap_or(0)
}

impl Header {
    /// Parses [Header] by consuming lines until end of this section,
    /// then validates its content.
    /// Lines that follow END OF HEADER are left untouched.
    pub(crate) fn parse<I>(lines: &mut Peekable<I>) -> Result<Self, Error>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        let mut header = Self::default();

        while let Some(line) = lines.next() {
            let line = line?;

            if is_rinex_comment(&line) {
                continue;
            }

            if line.contains(VERSION_LABEL) {
                header.revision = if is_rinex_v3(&line) {
                    Revision::V3
                } else {
                    Revision::V2
                };
                header.version = Version::from_header_line(&line);
                header.version_line = true;

                #[cfg(feature = "log")]
                debug!("{} header (version {:?})", header.revision, header.version);
            }

            if line.contains(ObsTypesLabel::SysObsTypes.label()) {
                header.parse_v3_obs_types(&line, lines)?;
            }

            if line.contains(ObsTypesLabel::TypesOfObserv.label()) {
                header.parse_v2_obs_types(&line, lines)?;
            }

            if line.contains(HEADER_END_MARKER) {
                header.terminated = true;
                break;
            }
        }

        header.validate()?;
        Ok(header)
    }

    /// Registers the declared count of a new declaration.
    /// Fails on non positive counts.
    fn declare(&mut self, label: ObsTypesLabel, content: &str) -> Result<usize, Error> {
        let declared = parse_declared_count(content);
        if declared <= 0 {
            return Err(Error::InvalidObsTypeCount {
                declared,
                collected: self.obs_types.len(),
            });
        }
        self.declared = Some(declared);
        self.declaration = Some(label);
        Ok(declared as usize)
    }

    /// Appends observables found in this content, until `expected` is reached.
    fn collect(&mut self, content: &str, skip: usize, label: ObsTypesLabel, expected: usize) {
        let (_, min_len, max_len) = label.layout();
        for code in extract_obs_types(content, skip, min_len, max_len, OBSERVABLE_FIRST_CHARS) {
            if self.obs_types.len() == expected {
                break;
            }
            self.obs_types.push(code);
        }
    }

    /// Parses a RINEX3 "SYS / # / OBS TYPES" declaration.
    /// Only the GPS declaration is interpreted. Continuation lines
    /// are consumed only while they carry the same label.
    fn parse_v3_obs_types<I>(&mut self, line: &str, lines: &mut Peekable<I>) -> Result<(), Error>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        let label = ObsTypesLabel::SysObsTypes;
        self.obs_types_line = true;

        if !line.starts_with('G') {
            #[cfg(feature = "log")]
            warn!("skipping non GPS declaration: \"{}\"", line.trim_end());
            return Ok(());
        }

        let content = header_content(line, label.label());
        let expected = self.declare(label, content.get(1..).unwrap_or_default())?;
        let (skip, _, _) = label.layout();
        self.collect(content, skip, label, expected);

        while self.obs_types.len() < expected {
            match lines.peek() {
                Some(Ok(next)) if next.contains(label.label()) => {},
                _ => break,
            }
            if let Some(next) = lines.next() {
                let next = next?;
                self.collect(header_content(&next, label.label()), 0, label, expected);
            }
        }

        #[cfg(feature = "log")]
        debug!("GPS observables: {:?}", self.obs_types);
        Ok(())
    }

    /// Parses a RINEX2 "# / TYPES OF OBSERV" declaration.
    /// Continuation lines are consumed until the declared count is reached,
    /// whatever their content. END OF HEADER is left to the header loop.
    fn parse_v2_obs_types<I>(&mut self, line: &str, lines: &mut Peekable<I>) -> Result<(), Error>
    where
        I: Iterator<Item = std::io::Result<String>>,
    {
        let label = ObsTypesLabel::TypesOfObserv;
        self.obs_types_line = true;

        let content = header_content(line, label.label());
        let expected = self.declare(label, content)?;
        let (skip, _, _) = label.layout();
        self.collect(content, skip, label, expected);

        while self.obs_types.len() < expected {
            match lines.peek() {
                Some(Ok(next)) if next.contains(HEADER_END_MARKER) => break,
                None => break,
                _ => {},
            }
            if let Some(next) = lines.next() {
                let next = next?;
                self.collect(header_content(&next, label.label()), 0, label, expected);
            }
        }

        #[cfg(feature = "log")]
        debug!("observables: {:?}", self.obs_types);
        Ok(())
    }
}

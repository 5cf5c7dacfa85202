//! Header consistency checks
use crate::{error::Error, header::Header, version::Revision};

#[cfg(feature = "log")]
use log::error;

/// RINEX3 attribute suffixes, that RINEX2 codes never carry
const V3_ATTRIBUTES: [char; 5] = ['C', 'W', 'P', 'S', 'X'];

/// RINEX2 codes, that RINEX3 codes never match
const V2_CODES: [&str; 6] = ["C1", "L1", "S1", "C2", "L2", "S2"];

impl Header {
    /// Verifies this [Header] can be used to interprate the following records.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        let result = self.check();

        #[cfg(feature = "log")]
        {
            if let Err(e) = &result {
                error!("invalid header: {}", e);
            }
        }

        result
    }

    fn check(&self) -> Result<(), Error> {
        if !self.terminated || !self.version_line || !self.obs_types_line {
            return Err(Error::MissingHeader);
        }

        if let Some(declaration) = self.declaration {
            if declaration.revision() != self.revision {
                return Err(Error::IncompatibleObsTypes {
                    revision: self.revision,
                    code: declaration.to_string(),
                });
            }
        }

        let declared = self.declared.unwrap_or(0);
        let collected = self.obs_types.len();
        if declared <= 0 || collected == 0 || collected as i64 != declared {
            return Err(Error::InvalidObsTypeCount {
                declared,
                collected,
            });
        }

        let incompatible = match self.revision {
            Revision::V2 => self
                .obs_types
                .iter()
                .find(|code| code.ends_with(&V3_ATTRIBUTES[..])),
            Revision::V3 => self
                .obs_types
                .iter()
                .find(|code| V2_CODES.contains(&code.as_str())),
        };

        match incompatible {
            Some(code) => Err(Error::IncompatibleObsTypes {
                revision: self.revision,
                code: code.clone(),
            }),
            None => Ok(()),
        }
    }
}

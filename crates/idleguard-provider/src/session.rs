use thiserror::Error;

/// Named-profile AWS credential context.
///
/// Validation happens at construction and again on every mutation; an
/// invalid session never reaches a provider call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    profile_name: String,
    region: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("profile name must not be empty")]
    EmptyProfile,
    #[error("profile name contains invalid characters: {0:?}")]
    InvalidProfile(String),
    #[error("region {0:?} does not look like an AWS region (e.g. eu-west-1)")]
    InvalidRegion(String),
}

/// Default region, matching the AWS CLI fallback used by inventory collectors.
pub const DEFAULT_REGION: &str = "eu-west-1";

impl Session {
    pub fn new(profile_name: &str) -> Result<Self, SessionError> {
        Self::with_region(profile_name, DEFAULT_REGION)
    }

    pub fn with_region(profile_name: &str, region: &str) -> Result<Self, SessionError> {
        validate_profile(profile_name)?;
        validate_region(region)?;
        Ok(Self {
            profile_name: profile_name.to_string(),
            region: region.to_string(),
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn set_profile_name(&mut self, profile_name: &str) -> Result<(), SessionError> {
        validate_profile(profile_name)?;
        self.profile_name = profile_name.to_string();
        Ok(())
    }

    pub fn set_region(&mut self, region: &str) -> Result<(), SessionError> {
        validate_region(region)?;
        self.region = region.to_string();
        Ok(())
    }
}

fn validate_profile(profile_name: &str) -> Result<(), SessionError> {
    if profile_name.is_empty() {
        return Err(SessionError::EmptyProfile);
    }
    let ok = profile_name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));
    if !ok {
        return Err(SessionError::InvalidProfile(profile_name.to_string()));
    }
    Ok(())
}

fn validate_region(region: &str) -> Result<(), SessionError> {
    // Shape check only: <letters>-<letters...>-<digit>, e.g. eu-west-1,
    // ap-southeast-2, us-gov-west-1.
    let parts: Vec<&str> = region.split('-').collect();
    let shape_ok = parts.len() >= 3
        && parts[..parts.len() - 1]
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_lowercase()))
        && parts[parts.len() - 1]
            .bytes()
            .all(|b| b.is_ascii_digit())
        && !parts[parts.len() - 1].is_empty();
    if !shape_ok {
        return Err(SessionError::InvalidRegion(region.to_string()));
    }
    Ok(())
}

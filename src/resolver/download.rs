// SPDX-License-Identifier: GPL-3.0-only
use url::Url;

use crate::distribution::{Distribution, ResolveError};
use crate::resolver::traits::PackageResolver;

pub const DEFAULT_BASE_URL: &str = "https://dev.mysql.com/get/Downloads/";

/// Where archives are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    base_url: Url,
}

impl DownloadConfig {
    pub fn new(base_url: &str) -> Result<Self, ResolveError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of the archive for `distribution`
    pub fn download_url(
        &self,
        resolver: &dyn PackageResolver,
        distribution: &Distribution,
    ) -> Result<Url, ResolveError> {
        let path = resolver.path(distribution)?;
        Ok(self.base_url.join(&path)?)
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

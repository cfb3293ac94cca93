// File: crates/splot-cli/src/spec.rs
// Summary: Parses `name[:key=value,...]` function specs from the command line.

use anyhow::{bail, Result};
use splot_core::{ParamValue, Params};

/// A function name with the params given for it.
#[derive(Debug, PartialEq)]
pub struct FnSpec {
    pub name: String,
    pub params: Params,
}

pub fn parse(raw: &str) -> Result<FnSpec> {
    let (name, rest) = match raw.split_once(':') {
        Some((n, r)) => (n.trim(), Some(r)),
        None => (raw.trim(), None),
    };
    if name.is_empty() {
        bail!("missing function name in '{raw}'");
    }

    let mut params = Params::new();
    for pair in rest.into_iter().flat_map(|r| r.split(',')).map(str::trim).filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected key=value, got '{pair}' in '{raw}'");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("empty parameter name in '{raw}'");
        }
        params.set(key, ParamValue::parse(value));
    }
    Ok(FnSpec { name: name.to_string(), params })
}

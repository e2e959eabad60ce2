//! The fixed, ordered catalog of recognized licenses.
//!
//! Licenses whose canonical text has known real-world variants get one
//! matcher per accepted phrasing: the template itself plus explicit
//! substitutions on it, combined with [`Matcher::any`]. Every accepted text
//! is a reviewable string, never a similarity threshold.

use std::collections::HashSet;

use crate::error::{LicenseError, LicenseResult};
use crate::license::matcher::Matcher;
use crate::license::template::TemplateStore;
use crate::license::License;

/// Immutable list of licenses, built once and shared by reference.
///
/// Lookups walk the list in order and stop at the first hit, so when two
/// entries accept the same input the earlier one wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    licenses: Vec<License>,
}

impl Catalog {
    /// The standard catalog built from the embedded templates.
    pub fn standard() -> LicenseResult<Self> {
        Self::build(&TemplateStore::embedded())
    }

    /// The standard catalog, taking reference texts from `templates`.
    pub fn build(templates: &TemplateStore) -> LicenseResult<Self> {
        let catalog = Self::from_licenses(vec![
            apache2(),
            apache2title(),
            bsd(),
            bsd2(templates)?,
            cc01(),
            gplv2(),
            gplv3(),
            isc_long(templates)?,
            lgpl(),
            mit(templates)?,
            mpl2(templates)?,
            newbsd(templates)?,
            python(),
            ruby(templates)?,
            simplifiedbsd(),
        ])?;

        tracing::info!("Built license catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// A catalog over arbitrary entries, rejecting duplicate short names.
    pub fn from_licenses(licenses: Vec<License>) -> LicenseResult<Self> {
        let mut seen = HashSet::new();
        for license in &licenses {
            if !seen.insert(license.short_name()) {
                return Err(LicenseError::DuplicateLicense {
                    short_name: license.short_name().to_string(),
                });
            }
        }
        Ok(Self { licenses })
    }

    pub fn all(&self) -> &[License] {
        &self.licenses
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    pub fn get(&self, short_name: &str) -> Option<&License> {
        self.licenses.iter().find(|l| l.short_name() == short_name)
    }

    /// A sentinel for a name that matched nothing. Never added to the catalog.
    pub fn build_unrecognized(name: &str) -> License {
        License::new(name).matcher(Matcher::none())
    }
}

fn apache2() -> License {
    License::new("Apache2")
        .pretty_name("Apache 2.0")
        .other_names([
            "Apache-2.0",
            "Apache Software License",
            "Apache License 2.0",
            "Apache License Version 2.0",
            "Apache Public License 2.0",
            "Apache Software License, Version 2.0",
            "Apache 2",
            "Apache License",
            "Apache License, Version 2.0",
        ])
        .url("http://www.apache.org/licenses/LICENSE-2.0.txt")
}

fn apache2title() -> License {
    License::new("Apache2title")
        .pretty_name("Apache 2.0")
        .url("http://www.apache.org/licenses/LICENSE-2.0.txt")
}

fn bsd() -> License {
    License::new("BSD")
        .other_names(["BSD4", "bsd-old", "4-clause BSD", "BSD-4-Clause", "BSD License"])
        .url("http://en.wikipedia.org/wiki/BSD_licenses#4-clause_license_.28original_.22BSD_License.22.29")
}

fn bsd2(templates: &TemplateStore) -> LicenseResult<License> {
    let template = templates.named("BSD2")?;
    let holder = template.substitute(
        "IN NO EVENT SHALL THE COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE",
        "IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE",
    );

    let matcher = Matcher::any([Matcher::from_template(template)?, Matcher::from_text(&holder)?]);

    Ok(License::new("BSD2")
        .pretty_name("2-clause BSD")
        .other_names([
            "BSD-2",
            "Simplified BSD License",
            "2-clause BSD",
            "BSD-2-Clause",
            "FreeBSD License",
        ])
        .url("https://en.wikipedia.org/wiki/BSD_licenses#2-clause_license_(%22Simplified_BSD_License%22_or_%22FreeBSD_License%22)")
        .matcher(matcher))
}

fn cc01() -> License {
    License::new("CC01")
        .pretty_name("CC0 1.0 Universal")
        .other_names(["CC0 1.0"])
        .url("http://creativecommons.org/publicdomain/zero/1.0")
}

fn gplv2() -> License {
    License::new("GPLv2")
        .other_names(["GPL V2", "gpl-v2", "GNU GENERAL PUBLIC LICENSE Version 2"])
        .url("http://www.gnu.org/licenses/gpl-2.0.txt")
}

fn gplv3() -> License {
    License::new("GPLv3")
        .other_names(["GPL V3", "gpl-v3", "GNU GENERAL PUBLIC LICENSE Version 3"])
        .url("http://www.gnu.org/licenses/gpl-3.0.txt")
}

fn isc_long(templates: &TemplateStore) -> LicenseResult<License> {
    let template = templates.named("ISC_long")?;
    // accept "and" instead of "and/or"
    let plain_and = template.substitute(
        "Permission to use, copy, modify, and/or distribute this software for any purpose with or without fee is hereby granted, provided that the above copyright notice and this permission notice appear in all copies.",
        "Permission to use, copy, modify, and distribute this software for any purpose with or without fee is hereby granted, provided that the above copyright notice and this permission notice appear in all copies.",
    );

    let matcher = Matcher::any([
        Matcher::from_template(template)?,
        Matcher::from_text(&plain_and)?,
    ]);

    Ok(License::new("ISC")
        .url("http://en.wikipedia.org/wiki/ISC_license")
        .matcher(matcher))
}

fn lgpl() -> License {
    License::new("LGPL")
        .other_names(["LGPL-3", "LGPLv3", "LGPL-3.0"])
        .url("http://www.gnu.org/licenses/lgpl.txt")
}

fn mit(templates: &TemplateStore) -> LicenseResult<License> {
    let url_regex = r"MIT Licen[sc]e.*http://(?:www\.)?opensource\.org/licenses/mit-license";
    let header_regex = r"The MIT Licen[sc]e";
    let one_liner_regex = r"is released under the MIT licen[sc]e";

    let matcher = Matcher::any([
        Matcher::from_template(templates.named("MIT")?)?,
        Matcher::from_regex(url_regex)?,
        Matcher::header(Matcher::from_regex(header_regex)?),
        Matcher::from_regex(one_liner_regex)?,
    ]);

    Ok(License::new("MIT")
        .other_names(["Expat", "MIT license", "MIT License"])
        .url("http://opensource.org/licenses/mit-license")
        .matcher(matcher))
}

fn mpl2(templates: &TemplateStore) -> LicenseResult<License> {
    let header_regex = r"Mozilla Public Licen[sc]e, version 2\.0";

    let matcher = Matcher::any([
        Matcher::from_template(templates.named("MPL2")?)?,
        Matcher::header(Matcher::from_regex(header_regex)?),
    ]);

    Ok(License::new("MPL2")
        .pretty_name("Mozilla Public License 2.0")
        .other_names(["MPL-2.0", "Mozilla Public License, Version 2.0"])
        .url("https://www.mozilla.org/media/MPL/2.0/index.815ca599c9df.txt")
        .matcher(matcher))
}

fn newbsd(templates: &TemplateStore) -> LicenseResult<License> {
    let templates = [templates.named("NewBSD")?, templates.named("NewBSD_no_star")?];

    let mut matchers = Vec::with_capacity(templates.len() * 2);
    for template in &templates {
        matchers.push(Matcher::from_template(template)?);
    }
    for template in &templates {
        let contributors_clause = template.substitute(
            "Neither the name of <organization> nor the names of its contributors may be used to endorse or promote products derived from this software without specific prior written permission.",
            "The names of its contributors may not be used to endorse or promote products derived from this software without specific prior written permission.",
        );
        matchers.push(Matcher::from_text(&contributors_clause)?);
    }

    Ok(License::new("NewBSD")
        .pretty_name("New BSD")
        .other_names(["Modified BSD", "BSD3", "BSD-3", "3-clause BSD", "BSD-3-Clause"])
        .url("http://opensource.org/licenses/BSD-3-Clause")
        .matcher(Matcher::any(matchers)))
}

fn python() -> License {
    License::new("Python")
        .pretty_name("Python Software Foundation License")
        .other_names(["PSF"])
        .url("http://hg.python.org/cpython/raw-file/89ce323357db/LICENSE")
}

fn ruby(templates: &TemplateStore) -> LicenseResult<License> {
    let url = "http://www.ruby-lang.org/en/LICENSE.txt";

    let matcher = Matcher::any([
        Matcher::from_template(templates.named("Ruby")?)?,
        Matcher::from_text(url)?,
    ]);

    Ok(License::new("Ruby")
        .pretty_name("ruby")
        .url(url)
        .matcher(matcher))
}

fn simplifiedbsd() -> License {
    License::new("SimplifiedBSD")
        .pretty_name("Simplified BSD")
        .other_names(["FreeBSD", "2-clause BSD", "BSD-2-Clause", "BSD 2-Clause"])
        .url("http://opensource.org/licenses/bsd-license")
}

use url::Url;

/// Query parameter that carries a shared library identifier.
pub const ID_PARAM: &str = "id";

/// The address the library page was opened at.
///
/// Only two things are read from it: the `id` query parameter during
/// identity resolution, and the origin + path when building a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(input)?,
        })
    }

    /// Interprets a CLI argument: either a full page URL or a bare
    /// identifier, which is appended to `base` as `?id=`.
    ///
    /// An argument only counts as a page URL when it has a host or an `id`
    /// parameter; `a:b` is an identifier, not a URL with scheme `a`.
    pub fn from_arg(arg: &str, base: &str) -> Result<Self, url::ParseError> {
        if let Ok(url) = Url::parse(arg) {
            let page = Self { url };
            if page.url.has_host() || page.id_param().is_some() {
                return Ok(page);
            }
        }
        let mut url = Url::parse(base)?;
        url.query_pairs_mut().clear().append_pair(ID_PARAM, arg);
        Ok(Self { url })
    }

    /// The first `id` query parameter, verbatim (an empty value counts).
    pub fn id_param(&self) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == ID_PARAM)
            .map(|(_, v)| v.into_owned())
    }

    /// The page address without query or fragment.
    pub fn origin_and_path(&self) -> String {
        let mut url = self.url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.to_string()
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

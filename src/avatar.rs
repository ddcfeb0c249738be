//! Avatar URL builders.

use std::fmt;

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar/";
const UI_AVATARS_BASE: &str = "https://ui-avatars.com/api/";

/// Image Gravatar serves when an address has no avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravatarDefault {
    /// Respond with HTTP 404 instead of an image
    NotFound,
    /// Generic silhouette ("mystery person")
    #[default]
    MysteryPerson,
    /// Geometric pattern derived from the hash
    Identicon,
    /// Generated monster
    MonsterId,
    /// Generated face
    Wavatar,
}

impl fmt::Display for GravatarDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravatarDefault::NotFound => write!(f, "404"),
            GravatarDefault::MysteryPerson => write!(f, "mm"),
            GravatarDefault::Identicon => write!(f, "identicon"),
            GravatarDefault::MonsterId => write!(f, "monsterid"),
            GravatarDefault::Wavatar => write!(f, "wavatar"),
        }
    }
}

/// Maximum content rating (inclusive) Gravatar may serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravatarRating {
    /// Suitable for all audiences
    #[default]
    G,
    /// Parental guidance
    Pg,
    /// Restricted
    R,
    /// Explicit
    X,
}

impl fmt::Display for GravatarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GravatarRating::G => write!(f, "g"),
            GravatarRating::Pg => write!(f, "pg"),
            GravatarRating::R => write!(f, "r"),
            GravatarRating::X => write!(f, "x"),
        }
    }
}

/// Query options for [`gravatar`].
///
/// Defaults to an 80px image, the mystery-person fallback and a `g` rating.
///
/// # Examples
///
/// ```
/// use web_helpers::avatar::{GravatarDefault, GravatarOptions, GravatarRating};
///
/// let options = GravatarOptions::new()
///     .size(200)
///     .fallback(GravatarDefault::Identicon)
///     .rating(GravatarRating::Pg);
/// assert_eq!(options.query(), "s=200&d=identicon&r=pg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravatarOptions {
    size: u32,
    fallback: GravatarDefault,
    rating: GravatarRating,
}

impl Default for GravatarOptions {
    fn default() -> Self {
        Self {
            size: 80,
            fallback: GravatarDefault::default(),
            rating: GravatarRating::default(),
        }
    }
}

impl GravatarOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the image size in pixels.
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the image served when the address has no avatar.
    pub fn fallback(mut self, fallback: GravatarDefault) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the maximum rating.
    pub fn rating(mut self, rating: GravatarRating) -> Self {
        self.rating = rating;
        self
    }

    /// Renders the options as a query string, without the leading `?`.
    pub fn query(&self) -> String {
        format!("s={}&d={}&r={}", self.size, self.fallback, self.rating)
    }
}

/// Builds a Gravatar URL for an email address.
///
/// The address is trimmed and lowercased before hashing with SHA-256.
///
/// # Examples
///
/// ```
/// use web_helpers::avatar::{gravatar, GravatarOptions};
///
/// let url = gravatar("  Someone@Example.com ", &GravatarOptions::default());
/// assert!(url.starts_with("https://www.gravatar.com/avatar/"));
/// assert!(url.ends_with("?s=80&d=mm&r=g"));
/// ```
pub fn gravatar(email: &str, options: &GravatarOptions) -> String {
    let normalized = email.trim().to_lowercase();

    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    let hash = hex::encode(hasher.finalize());

    format!("{GRAVATAR_BASE}{hash}?{}", options.query())
}

/// Builds a placeholder avatar URL from a display name's initials.
///
/// The first character of each space-separated word is kept.
///
/// # Examples
///
/// ```
/// use web_helpers::avatar::avatar;
///
/// assert_eq!(
///     avatar("Ada King Lovelace"),
///     "https://ui-avatars.com/api/?name=A%20K%20L&color=7F9CF5&background=EBF4FF"
/// );
/// ```
pub fn avatar(name: &str) -> String {
    let initials: Vec<String> = name
        .split(' ')
        .map(|segment| segment.chars().take(1).collect())
        .collect();
    let initials = initials.join(" ");

    format!(
        "{UI_AVATARS_BASE}?name={}&color=7F9CF5&background=EBF4FF",
        urlencoding::encode(initials.trim())
    )
}

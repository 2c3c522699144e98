//! In-memory representation of a signalling message.
//!
//! A [`Message`] pairs an ordered [`Headers`] collection with an opaque
//! payload. Header order is significant: the codec writes headers in
//! iteration order, so two messages with the same pairs in a different order
//! encode to different bytes.

use bytes::Bytes;

/// Ordered collection of unique header name/value pairs.
///
/// Iteration yields pairs in insertion order. Inserting a name that is
/// already present replaces its value without moving it.
///
/// # Examples
///
/// ```
/// use binary_signal::message::Headers;
///
/// let mut headers = Headers::new();
/// headers.insert("route", "alpha");
/// headers.insert("ttl", "30");
/// headers.insert("route", "beta");
///
/// let names: Vec<_> = headers.names().collect();
/// assert_eq!(names, ["route", "ttl"]);
/// assert_eq!(headers.get("route"), Some("beta"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header collection.
    #[must_use]
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    /// Create an empty header collection with room for `capacity` pairs.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a header, returning the previous value when `name` was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Look up the value stored for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Report whether a header called `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Report whether the collection holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Iterate over header names in insertion order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over header values in insertion order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl<N, V> Extend<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter { self.entries.into_iter() }
}

/// A message carried over the signalling channel.
///
/// # Examples
///
/// ```
/// use binary_signal::message::Message;
///
/// let message = Message::new(b"ping".as_slice()).with_header("kind", "probe");
/// assert_eq!(message.headers().get("kind"), Some("probe"));
/// assert_eq!(message.payload().as_ref(), b"ping");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    headers: Headers,
    payload: Bytes,
}

impl Message {
    /// Create a message with no headers.
    #[must_use]
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            headers: Headers::new(),
            payload: payload.into(),
        }
    }

    /// Create a message from existing headers and payload.
    #[must_use]
    pub fn from_parts(headers: Headers, payload: impl Into<Bytes>) -> Self {
        Self {
            headers,
            payload: payload.into(),
        }
    }

    /// Append or replace a header, returning the updated message.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Borrow the header collection.
    #[must_use]
    pub fn headers(&self) -> &Headers { &self.headers }

    /// Mutably borrow the header collection.
    pub fn headers_mut(&mut self) -> &mut Headers { &mut self.headers }

    /// Borrow the payload bytes.
    #[must_use]
    pub fn payload(&self) -> &Bytes { &self.payload }

    /// Replace the payload.
    pub fn set_payload(&mut self, payload: impl Into<Bytes>) { self.payload = payload.into(); }

    /// Consume the message, returning its headers and payload.
    #[must_use]
    pub fn into_parts(self) -> (Headers, Bytes) { (self.headers, self.payload) }
}

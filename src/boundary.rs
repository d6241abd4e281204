//! Boundary encoding of one nesting level.
//!
//! [`encode`] flattens the nested elements of a sequence into a flat token
//! stream, wrapping the children of each nested element in an
//! [`Token::Open`] / [`Token::Close`] pair. [`decode`] reverses it. Markers are
//! a separate enum case rather than sentinel values, so no data item can ever
//! be mistaken for one.
//!
//! ```rust
//! use seqmerge::boundary::{decode, encode, Token};
//! use seqmerge::{seq, value};
//!
//! let nested = seq![1, [2], 3];
//! let tokens = encode(&nested);
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::Item(value!(1)),
//!         Token::Open(0),
//!         Token::Item(value!(2)),
//!         Token::Close(0),
//!         Token::Item(value!(3)),
//!     ]
//! );
//! assert_eq!(decode(tokens), nested);
//! ```
//!
//! Only one level is encoded: grandchildren stay nested inside their
//! `Item`. Marker indices count nested elements in the order they appear.

use crate::{Error, Nestable, Result};

/// One element of an encoded stream.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token<T> {
    /// A plain item.
    Item(T),
    /// Start of the nested sequence with this index.
    Open(usize),
    /// End of the nested sequence with this index.
    Close(usize),
}

impl<T> Token<T> {
    /// Returns the marker index, or `None` for an item.
    #[must_use]
    pub fn boundary(&self) -> Option<usize> {
        match self {
            Token::Item(_) => None,
            Token::Open(index) | Token::Close(index) => Some(*index),
        }
    }

    /// Returns `true` for an `Open` or `Close` marker.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.boundary().is_some()
    }
}

/// Flattens one nesting level of `seq` into a token stream.
#[must_use]
pub fn encode<T>(seq: &[T]) -> Vec<Token<T>>
where
    T: Nestable + Clone,
{
    let mut tokens = Vec::with_capacity(seq.len());
    let mut next = 0;
    for item in seq {
        match item.as_sequence() {
            Some(children) => {
                tokens.push(Token::Open(next));
                tokens.extend(children.iter().cloned().map(Token::Item));
                tokens.push(Token::Close(next));
                next += 1;
            }
            None => tokens.push(Token::Item(item.clone())),
        }
    }
    tokens
}

/// Counts the nested sequences described by `tokens`.
#[must_use]
pub fn boundary_count<T>(tokens: &[Token<T>]) -> usize {
    tokens
        .iter()
        .filter(|token| matches!(token, Token::Open(_)))
        .count()
}

/// Rebuilds nested sequences from a token stream.
///
/// Decoding never fails. Markers without a partner are tolerated:
///
/// - a `Close` with no matching `Open` is dropped
/// - an `Open` that is never closed is dropped and its contents stay at the
///   enclosing level
/// - closing a group while groups opened inside it are still open splices
///   those inner groups into it
///
/// Use [`try_decode`] to reject such streams instead.
#[must_use]
pub fn decode<T: Nestable>(tokens: Vec<Token<T>>) -> Vec<T> {
    let decoded = Decoder::run(tokens);
    if !decoded.unopened.is_empty() || !decoded.unclosed.is_empty() {
        log::debug!(
            "decode: dropped unopened markers {:?} and unclosed markers {:?}",
            decoded.unopened,
            decoded.unclosed
        );
    }
    decoded.root
}

/// Rebuilds nested sequences, rejecting unmatched markers.
///
/// # Errors
///
/// Returns [`Error::MalformedBoundaries`] for the first `Close` without an
/// `Open`, or else for the first `Open` that is not properly closed.
///
/// # Examples
///
/// ```rust
/// use seqmerge::boundary::{try_decode, Token};
/// use seqmerge::Value;
///
/// let tokens: Vec<Token<Value>> = vec![Token::Close(0), Token::Open(0)];
/// assert!(try_decode(tokens).is_err());
/// ```
pub fn try_decode<T: Nestable>(tokens: Vec<Token<T>>) -> Result<Vec<T>> {
    let decoded = Decoder::run(tokens);
    if let Some(&index) = decoded.unopened.first() {
        return Err(Error::malformed_boundaries(index, "unopened"));
    }
    if let Some(&index) = decoded.unclosed.first() {
        return Err(Error::malformed_boundaries(index, "unclosed"));
    }
    Ok(decoded.root)
}

struct Frame<T> {
    index: usize,
    items: Vec<T>,
}

struct Decoder<T> {
    root: Vec<T>,
    open: Vec<Frame<T>>,
    unopened: Vec<usize>,
    unclosed: Vec<usize>,
}

impl<T: Nestable> Decoder<T> {
    fn run(tokens: Vec<Token<T>>) -> Self {
        let mut decoder = Decoder {
            root: Vec::with_capacity(tokens.len()),
            open: Vec::new(),
            unopened: Vec::new(),
            unclosed: Vec::new(),
        };
        for token in tokens {
            match token {
                Token::Item(item) => decoder.push(item),
                Token::Open(index) => decoder.open.push(Frame {
                    index,
                    items: Vec::new(),
                }),
                Token::Close(index) => decoder.close(index),
            }
        }
        while let Some(frame) = decoder.open.pop() {
            decoder.splice(frame);
        }
        decoder
    }

    fn push(&mut self, item: T) {
        match self.open.last_mut() {
            Some(frame) => frame.items.push(item),
            None => self.root.push(item),
        }
    }

    fn splice(&mut self, frame: Frame<T>) {
        self.unclosed.push(frame.index);
        match self.open.last_mut() {
            Some(parent) => parent.items.extend(frame.items),
            None => self.root.extend(frame.items),
        }
    }

    fn close(&mut self, index: usize) {
        let Some(depth) = self.open.iter().rposition(|frame| frame.index == index) else {
            self.unopened.push(index);
            return;
        };
        while self.open.len() > depth + 1 {
            if let Some(inner) = self.open.pop() {
                self.splice(inner);
            }
        }
        if let Some(frame) = self.open.pop() {
            self.push(T::from_sequence(frame.items));
        }
    }
}

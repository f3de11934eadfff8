//! Interactive fuzzy selection over a list of labeled candidates.
//!
//! Candidates are anything that can render a display label, paired with
//! their position in the caller's list. Each one is encoded as a
//! `index<TAB>label` line for the finder; the label alone is what the
//! finder matches against and displays, while the encoded line is what it
//! emits back on confirmation. Decoding splits the emitted line at the
//! first tab, so a label that itself contains a tab still recovers the
//! correct index (only its display columns are affected).
//!
//! The finder owns the terminal for the duration of the call.

use std::borrow::Cow;
use std::fmt::Display;
use std::thread;

use log::debug;
use skim::prelude::*;

use crate::error::{Error, Result};

/// Delimiter between a candidate's original index and its label.
const DELIMITER: char = '\t';

/// A list item offered to the fuzzy finder.
///
/// Identity is the original index; the label is what the user sees.
struct Candidate {
    index: usize,
    label: String,
}

impl Candidate {
    fn encoded(&self) -> String {
        format!("{}{}{}", self.index, DELIMITER, self.label)
    }
}

impl SkimItem for Candidate {
    /// Matching and display operate on the label only.
    fn text(&self) -> Cow<str> {
        Cow::Borrowed(&self.label)
    }

    /// The finder emits the encoded line when the candidate is confirmed.
    fn output(&self) -> Cow<str> {
        Cow::Owned(self.encoded())
    }
}

fn candidates_of<T: Display>(items: &[T]) -> Vec<Candidate> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Candidate {
            index,
            label: item.to_string(),
        })
        .collect()
}

fn decode_selection(line: &str) -> Result<usize> {
    let Some((index, _label)) = line.split_once(DELIMITER) else {
        return Err(Error::decode_failed(
            line.to_string(),
            "missing delimiter".to_string(),
        ));
    };

    index
        .parse()
        .map_err(|e: std::num::ParseIntError| Error::decode_failed(line.to_string(), e.to_string()))
}

/// Maps the finder's confirmed items to a selection result.
///
/// The finder emits at most one confirmed line per session, but only the
/// last one counts either way. A closed output stream with no confirmed
/// item means the user walked away without choosing.
fn selection_outcome(selected: &[Arc<dyn SkimItem>]) -> Result<usize> {
    match selected.last() {
        Some(item) => decode_selection(item.output().as_ref()),
        None => Err(Error::NoSelection),
    }
}

/// Presents an interactive fuzzy finder over `items` and returns the
/// original index of the item the user confirmed.
///
/// `initial_query` prefills the finder's search field; pass an empty
/// string for no prefill. The candidates are offered to the finder in
/// list order, which governs the default display order. The call blocks
/// until the finder session ends and takes over the terminal while it
/// runs.
///
/// # Errors
///
/// Returns [`Error::NoSelection`] if `items` is empty or the user
/// aborted without choosing, [`Error::SearchFailed`] if the finder could
/// not run, and [`Error::DecodeFailed`] if its output did not round-trip
/// back to an index.
pub fn fuzzy_select<T: Display>(items: &[T], initial_query: &str) -> Result<usize> {
    if items.is_empty() {
        return Err(Error::NoSelection);
    }

    let options = SkimOptionsBuilder::default()
        .query(if initial_query.is_empty() {
            None
        } else {
            Some(initial_query)
        })
        .layout("reverse")
        .build()
        .map_err(|e| Error::SearchFailed(e.to_string()))?;

    let candidates = candidates_of(items);
    debug!("Offering {} candidates to the fuzzy finder", candidates.len());

    let (tx_item, rx_item): (SkimItemSender, SkimItemReceiver) = unbounded();

    // Offer every candidate in the caller's order, then close the stream
    // by dropping the sender. The finder stops reading once its session
    // ends, so a send error just means the remaining candidates are moot.
    let producer = thread::spawn(move || {
        for candidate in candidates {
            if tx_item.send(Arc::new(candidate)).is_err() {
                break;
            }
        }
    });

    // Blocks until the finder session terminates.
    let output = Skim::run_with(&options, Some(rx_item));

    let _ = producer.join();

    let Some(output) = output else {
        return Err(Error::SearchFailed(
            "the finder did not start".to_string(),
        ));
    };

    if output.is_abort {
        return Err(Error::NoSelection);
    }

    selection_outcome(&output.selected_items)
}

//! Paginated, optionally searched note listing.
//!
//! Note content only exists as plaintext after decoding, so a search has to
//! decode every stored note before filtering. That makes each search O(N) in
//! the number of stored notes regardless of the page size. Listing without a
//! search decodes only the rows on the requested page.

use crate::codec::XorCodec;
use crate::error::AppError;
use crate::models::note::{Note, NoteView};
use crate::models::page::{PageRequest, PageResult, PaginationMeta};
use crate::text::{contains_case_insensitive, normalize_optional_nonempty};

struct Candidate {
    note: Note,
    content: Option<String>,
}

impl Candidate {
    fn into_view(self, codec: &XorCodec) -> Result<NoteView, AppError> {
        let content = match self.content {
            Some(content) => content,
            None => codec.decode(&self.note.content_at_rest)?,
        };
        Ok(NoteView::from_decoded(self.note, content))
    }
}

/// Build one page of decoded notes.
///
/// A search term is trimmed first; a blank term lists everything. With a term,
/// a note is kept when its title or decoded content contains the term,
/// ignoring case. Retained notes are ordered by creation time, then id, and
/// `total` counts every retained note, not just the page.
///
/// # Arguments
/// - `notes`: Every stored note (the candidate set).
/// - `request`: Requested page window.
/// - `search`: Optional search term.
/// - `codec`: Codec for the active key.
///
/// # Returns
/// The requested page and its pagination metadata. A page past the end is
/// empty rather than an error.
///
/// # Errors
/// Returns [`AppError::InvalidInput`] when a note that must be decoded holds
/// malformed at-rest content.
pub fn list_page(
    notes: Vec<Note>,
    request: PageRequest,
    search: Option<&str>,
    codec: &XorCodec,
) -> Result<PageResult<NoteView>, AppError> {
    let term = normalize_optional_nonempty(search).map(|term| term.to_lowercase());

    let mut candidates = Vec::with_capacity(notes.len());
    for note in notes {
        let Some(term) = term.as_deref() else {
            candidates.push(Candidate {
                note,
                content: None,
            });
            continue;
        };
        let content = codec.decode(&note.content_at_rest)?;
        if contains_case_insensitive(&note.title, term)
            || contains_case_insensitive(&content, term)
        {
            candidates.push(Candidate {
                note,
                content: Some(content),
            });
        }
    }

    candidates.sort_by(|a, b| {
        a.note
            .created_at
            .cmp(&b.note.created_at)
            .then_with(|| a.note.id.cmp(&b.note.id))
    });

    let meta = PaginationMeta::new(request, candidates.len() as u64);
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let data = candidates
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|candidate| candidate.into_view(codec))
        .collect::<Result<Vec<_>, _>>()?;

    if term.is_some() {
        tracing::debug!(
            matched = meta.total,
            returned = data.len(),
            "Search listing scanned all notes"
        );
    }

    Ok(PageResult { data, meta })
}

use crate::model::ResultSet;

/// Forward-only position over one query's ordered result identifiers.
///
/// Created fresh on every successful submission and replaced wholesale by
/// the next one. Advancing past the last identifier clamps there; there is
/// no wraparound and no way back, matching the single "next" affordance.
#[derive(Debug, Clone)]
pub struct ResultCursor {
    results: ResultSet,
    position: usize,
}

impl ResultCursor {
    pub fn new(results: ResultSet) -> Self {
        ResultCursor {
            results,
            position: 0,
        }
    }

    /// The identifier under the cursor, or None when there are no results.
    pub fn current(&self) -> Option<&str> {
        self.results.get(self.position).map(String::as_str)
    }

    /// Move to the next identifier. Returns false once the end is reached;
    /// further calls stay on the last identifier and keep returning false.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.results.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

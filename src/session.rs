use crate::clients::{DetailStore, Recommender};
use crate::cursor::ResultCursor;
use crate::error::RecommendError;
use crate::instructions::format_instructions;
use crate::model::{Query, RecipeDetail, Step};
use crate::query::{self, QueryForm};
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No query in flight and nothing to browse
    Idle,
    /// A query has been submitted and is awaiting results
    Querying,
    /// Results are available and the cursor points at one of them
    Browsing,
    /// The cursor sits on the last result; next() keeps saying so
    Exhausted,
}

/// Human-readable outcome of the most recent submit() or next().
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The query was valid but matched nothing
    NoMatches,
    /// next() was called with nothing left to show
    EndOfResults,
    /// The recommendation request could not be completed
    RequestFailed,
    /// The current recipe's detail could not be loaded
    DetailUnavailable,
    /// A form field failed validation; no request was sent
    Invalid { field: String, message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoMatches => {
                write!(
                    f,
                    "No matching recipes found. Please adjust your criteria and try again."
                )
            }
            Notice::EndOfResults => write!(f, "You've reached the end of the recommendations."),
            Notice::RequestFailed => {
                write!(f, "Failed to get recommendations from the backend.")
            }
            Notice::DetailUnavailable => write!(f, "Could not load the recipe details."),
            Notice::Invalid { field, message } => write!(f, "{field}: {message}"),
        }
    }
}

/// One user's recommendation flow: owns the active query, the result cursor
/// and the currently displayed detail, and drives the external collaborators.
///
/// All mutation goes through `&mut self`, so a submission replaces the
/// previous query, cursor and detail atomically and an outstanding call can
/// never be raced by a newer one on the same session.
pub struct RecommendationSession {
    recommender: Arc<dyn Recommender>,
    details: Arc<dyn DetailStore>,
    state: SessionState,
    query: Option<Query>,
    cursor: Option<ResultCursor>,
    detail: Option<RecipeDetail>,
    notice: Option<Notice>,
}

impl RecommendationSession {
    pub fn new(recommender: Arc<dyn Recommender>, details: Arc<dyn DetailStore>) -> Self {
        RecommendationSession {
            recommender,
            details,
            state: SessionState::Idle,
            query: None,
            cursor: None,
            detail: None,
            notice: None,
        }
    }

    /// Build a query from raw form values and run it.
    ///
    /// A validation failure aborts before anything changes: no request is
    /// sent, the previous cursor and detail stay as they were, and the
    /// failing field is surfaced as a [`Notice::Invalid`]. A well-formed
    /// submission discards the prior cursor, queries the service, and ends
    /// in `Browsing` (with the first detail loaded) or back in `Idle`.
    pub async fn submit(&mut self, form: &QueryForm) -> &SessionState {
        self.notice = None;

        let query = match query::build(form) {
            Ok(query) => query,
            Err(RecommendError::Validation { field, message }) => {
                debug!("rejected submission: invalid '{field}'");
                self.notice = Some(Notice::Invalid { field, message });
                return &self.state;
            }
            Err(other) => {
                // query::build only fails validation; anything else would
                // be a bug in this crate
                warn!("unexpected build failure: {other}");
                self.notice = Some(Notice::RequestFailed);
                return &self.state;
            }
        };

        // Prior results are stale the moment a new query goes out
        self.state = SessionState::Querying;
        self.cursor = None;
        self.detail = None;

        let outcome = self.recommender.recommend(&query).await;
        self.query = Some(query);

        let results = match outcome {
            Ok(results) => results,
            Err(err) => {
                warn!("recommendation request failed: {err}");
                self.state = SessionState::Idle;
                self.notice = Some(Notice::RequestFailed);
                return &self.state;
            }
        };

        if results.is_empty() {
            debug!("query matched no recipes");
            self.state = SessionState::Idle;
            self.notice = Some(Notice::NoMatches);
            return &self.state;
        }

        debug!("browsing {} result(s)", results.len());
        let cursor = ResultCursor::new(results);
        self.state = SessionState::Browsing;
        self.load_current_detail(&cursor).await;
        self.cursor = Some(cursor);
        &self.state
    }

    /// Step to the next result.
    ///
    /// While browsing, advances the cursor and loads the new detail. At the
    /// end of the results, moves to `Exhausted`, keeps the last detail
    /// visible, and keeps re-signaling [`Notice::EndOfResults`] on every
    /// further call. Outside of browsing this is a no-op.
    pub async fn next(&mut self) -> &SessionState {
        self.notice = None;

        let mut cursor = match self.cursor.take() {
            Some(cursor) => cursor,
            None => return &self.state,
        };

        if cursor.advance() {
            self.state = SessionState::Browsing;
            self.load_current_detail(&cursor).await;
        } else {
            debug!("end of results at position {}", cursor.position());
            self.state = SessionState::Exhausted;
            self.notice = Some(Notice::EndOfResults);
        }
        self.cursor = Some(cursor);
        &self.state
    }

    /// Fetch the detail under the cursor. A fetch failure keeps whatever
    /// detail was shown before and surfaces a notice instead.
    async fn load_current_detail(&mut self, cursor: &ResultCursor) {
        let identifier = match cursor.current() {
            Some(identifier) => identifier,
            None => return,
        };
        match self.details.fetch_detail(identifier).await {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => {
                warn!("failed to fetch detail for '{identifier}': {err}");
                self.notice = Some(Notice::DetailUnavailable);
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The most recent submit()/next() outcome worth telling the user about.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The active query, if a well-formed one has been submitted.
    pub fn current_query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// The detail record currently on display.
    pub fn current_detail(&self) -> Option<&RecipeDetail> {
        self.detail.as_ref()
    }

    /// The displayed detail's instructions, normalized into steps.
    pub fn current_instructions(&self) -> Option<Vec<Step>> {
        self.detail
            .as_ref()
            .map(|detail| format_instructions(&detail.instructions))
    }
}

use crate::decoders::decode_meals_or_empty;
use crate::error::RecipeError;
use crate::fetchers::Fetcher;
use crate::filter::filter_meals;
use crate::model::{sort_by_name, Meal, MealCollection};
use log::{debug, info, warn};
use reqwest::Url;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Which client operation a failure or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadList,
    LoadDetail,
}

/// The most recent failed load, kept for observability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub operation: Operation,
    pub message: String,
    /// Transport failure rather than a malformed response
    pub is_network: bool,
}

/// Notification sent to observers after state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    CollectionReplaced { len: usize },
    SelectionChanged { id: Option<String> },
    LoadFailed { operation: Operation },
}

/// How a successful `load_detail` call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The meal was found and is now the selection
    Loaded(Meal),
    /// The lookup succeeded but returned no meal; selection stays unset
    NotFound,
    /// A newer detail load or `clear_selection` was issued while this one was
    /// in flight, so its result was discarded
    Superseded,
}

type Observer = Box<dyn Fn(&StateEvent) + Send + Sync>;

#[derive(Debug, Default)]
struct Selection {
    // Bumped by every load_detail and clear_selection
    generation: u64,
    meal: Option<Meal>,
}

/// Owns the loaded meal collection and the current selection.
///
/// Both cells are only changed through [`load_list`](Self::load_list),
/// [`load_detail`](Self::load_detail) and
/// [`clear_selection`](Self::clear_selection). Overlapping detail loads
/// resolve last-issued-wins: a result is applied only if no newer detail
/// load or clear happened since it started.
pub struct RecipeClient {
    fetcher: Box<dyn Fetcher>,
    list_url: String,
    lookup_url: Url,
    collection: RwLock<MealCollection>,
    selection: RwLock<Selection>,
    last_failure: RwLock<Option<Failure>>,
    observers: RwLock<Vec<Observer>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl RecipeClient {
    /// Creates a new builder for the client
    ///
    /// # Example
    /// ```
    /// use dessert_recipes::RecipeClient;
    ///
    /// let client = RecipeClient::builder().build().unwrap();
    /// assert!(client.collection().is_empty());
    /// ```
    pub fn builder() -> crate::builder::RecipeClientBuilder {
        crate::builder::RecipeClientBuilder::default()
    }

    pub(crate) fn new(fetcher: Box<dyn Fetcher>, base_url: &Url, category: &str) -> Self {
        let mut list_url = base_url.join("filter.php").unwrap_or_else(|_| base_url.clone());
        list_url.query_pairs_mut().append_pair("c", category);
        let lookup_url = base_url.join("lookup.php").unwrap_or_else(|_| base_url.clone());

        Self {
            fetcher,
            list_url: list_url.to_string(),
            lookup_url,
            collection: RwLock::new(Vec::new()),
            selection: RwLock::new(Selection::default()),
            last_failure: RwLock::new(None),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the loaded meals, sorted by name. Empty before the first
    /// successful [`load_list`](Self::load_list).
    pub fn collection(&self) -> MealCollection {
        read(&self.collection).clone()
    }

    pub fn selection(&self) -> Option<Meal> {
        read(&self.selection).meal.clone()
    }

    /// The collection narrowed by the case-insensitive prefix filter
    pub fn filtered(&self, query: &str) -> Vec<Meal> {
        filter_meals(&read(&self.collection), query)
    }

    pub fn last_failure(&self) -> Option<Failure> {
        read(&self.last_failure).clone()
    }

    /// Register a callback invoked after every state change.
    ///
    /// Callbacks run on the task that performed the change, after the state
    /// locks are released, so they may read the client.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&StateEvent) + Send + Sync + 'static,
    {
        write(&self.observers).push(Box::new(observer));
    }

    /// Fetch the category list and replace the collection.
    ///
    /// Returns the number of meals now loaded. On failure the collection is
    /// left untouched and the failure is recorded.
    pub async fn load_list(&self) -> Result<usize, RecipeError> {
        info!("Loading meal list from {}", self.list_url);

        let result = async {
            let body = self.fetcher.get(&self.list_url).await?;
            decode_meals_or_empty(&body)
        }
        .await;

        match result {
            Ok(mut meals) => {
                sort_by_name(&mut meals);
                let len = meals.len();
                *write(&self.collection) = meals;

                info!("Loaded {} meals", len);
                self.notify(&StateEvent::CollectionReplaced { len });
                Ok(len)
            }
            Err(e) => {
                self.record_failure(Operation::LoadList, &e);
                Err(e)
            }
        }
    }

    /// Fetch one meal by id and make it the selection.
    ///
    /// The selection is cleared before the request is sent so stale data is
    /// never visible under a new id. A lookup that returns no meal leaves the
    /// selection unset and yields [`DetailOutcome::NotFound`].
    pub async fn load_detail(&self, id: &str) -> Result<DetailOutcome, RecipeError> {
        let (generation, cleared) = {
            let mut selection = write(&self.selection);
            selection.generation += 1;
            (selection.generation, selection.meal.take().is_some())
        };
        if cleared {
            self.notify(&StateEvent::SelectionChanged { id: None });
        }

        let mut url = self.lookup_url.clone();
        url.query_pairs_mut().append_pair("i", id);
        info!("Loading meal {} from {}", id, url);

        let result = async {
            let body = self.fetcher.get(url.as_str()).await?;
            decode_meals_or_empty(&body)
        }
        .await;

        match result {
            Ok(meals) => {
                let found = meals.into_iter().next();
                {
                    let mut selection = write(&self.selection);
                    if selection.generation != generation {
                        debug!("Discarding superseded result for meal {}", id);
                        return Ok(DetailOutcome::Superseded);
                    }
                    selection.meal = found.clone();
                }

                match found {
                    Some(meal) => {
                        self.notify(&StateEvent::SelectionChanged {
                            id: Some(meal.id.clone()),
                        });
                        Ok(DetailOutcome::Loaded(meal))
                    }
                    None => {
                        info!("Meal {} not found", id);
                        Ok(DetailOutcome::NotFound)
                    }
                }
            }
            Err(e) => {
                if read(&self.selection).generation != generation {
                    debug!("Ignoring failure for superseded meal {}: {}", id, e);
                    return Ok(DetailOutcome::Superseded);
                }
                self.record_failure(Operation::LoadDetail, &e);
                Err(e)
            }
        }
    }

    /// Unset the selection and discard any detail load still in flight.
    pub fn clear_selection(&self) {
        let cleared = {
            let mut selection = write(&self.selection);
            selection.generation += 1;
            selection.meal.take().is_some()
        };
        if cleared {
            self.notify(&StateEvent::SelectionChanged { id: None });
        }
    }

    fn record_failure(&self, operation: Operation, error: &RecipeError) {
        warn!("{:?} failed: {}", operation, error);
        *write(&self.last_failure) = Some(Failure {
            operation,
            message: error.to_string(),
            is_network: error.is_network(),
        });
        self.notify(&StateEvent::LoadFailed { operation });
    }

    fn notify(&self, event: &StateEvent) {
        for observer in read(&self.observers).iter() {
            observer(event);
        }
    }
}

use todo_core::{ApiError, Todo, TodoId};

/// Identifies one list fetch. Only the newest generation may land.
pub type Generation = u64;

/// Cached result of the todo list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodosQuery {
    data: Option<Vec<Todo>>,
    error: Option<ApiError>,
    in_flight: Option<Generation>,
    last_generation: Generation,
}

impl TodosQuery {
    pub fn data(&self) -> Option<&[Todo]> {
        self.data.as_deref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// No result of any kind yet.
    pub fn is_pending(&self) -> bool {
        self.data.is_none() && self.error.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a fetch unless one is already running or data is cached.
    pub(crate) fn ensure_fetching(&mut self) -> Option<Generation> {
        if self.in_flight.is_some() || self.data.is_some() {
            return None;
        }
        Some(self.start_fetch())
    }

    /// Mark the cached list stale. Always starts a fresh fetch; an older one
    /// still in flight is superseded.
    pub(crate) fn invalidate(&mut self) -> Generation {
        self.start_fetch()
    }

    fn start_fetch(&mut self) -> Generation {
        self.last_generation += 1;
        self.in_flight = Some(self.last_generation);
        self.last_generation
    }

    /// Apply a fetch result. Returns false when `generation` was superseded
    /// and the result was dropped.
    pub(crate) fn resolve(&mut self, generation: Generation, result: Result<Vec<Todo>, ApiError>) -> bool {
        if self.in_flight != Some(generation) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(todos) => {
                self.data = Some(todos);
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
        true
    }

    pub(crate) fn title_of(&self, id: &TodoId) -> Option<&str> {
        self.data()?
            .iter()
            .find(|todo| &todo.id == id)
            .map(|todo| todo.title.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

/// Bookkeeping for one kind of mutation. Failures are kept here and never
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationStatus {
    pub pending: usize,
    pub last_error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutations {
    create: MutationStatus,
    update: MutationStatus,
    delete: MutationStatus,
}

impl Mutations {
    pub fn get(&self, kind: MutationKind) -> &MutationStatus {
        match kind {
            MutationKind::Create => &self.create,
            MutationKind::Update => &self.update,
            MutationKind::Delete => &self.delete,
        }
    }

    fn get_mut(&mut self, kind: MutationKind) -> &mut MutationStatus {
        match kind {
            MutationKind::Create => &mut self.create,
            MutationKind::Update => &mut self.update,
            MutationKind::Delete => &mut self.delete,
        }
    }

    pub(crate) fn begin(&mut self, kind: MutationKind) {
        self.get_mut(kind).pending += 1;
    }

    pub(crate) fn settle(&mut self, kind: MutationKind, result: Result<(), ApiError>) {
        let status = self.get_mut(kind);
        status.pending = status.pending.saturating_sub(1);
        status.last_error = result.err();
    }

    pub fn any_pending(&self) -> bool {
        self.create.pending + self.update.pending + self.delete.pending > 0
    }
}

/// Everything the todo screen owns: the drafts, the edit target, and the
/// query/mutation caches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub(crate) new_todo: String,
    pub(crate) editing: Option<TodoId>,
    pub(crate) edit_draft: String,
    pub(crate) todos: TodosQuery,
    pub(crate) mutations: Mutations,
}

impl AppState {
    pub fn new_todo(&self) -> &str {
        &self.new_todo
    }

    pub fn editing(&self) -> Option<&TodoId> {
        self.editing.as_ref()
    }

    pub fn edit_draft(&self) -> &str {
        &self.edit_draft
    }

    pub fn todos(&self) -> &TodosQuery {
        &self.todos
    }

    pub fn mutations(&self) -> &Mutations {
        &self.mutations
    }
}

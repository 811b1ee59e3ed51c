//! Snapshot-based to-do collection.
//!
//! A [`TodoSnapshot`] is never mutated after construction. Every user intent is
//! run through [`TodoSnapshot::reduce`], which returns a new snapshot sharing
//! nothing mutable with the old one, so a renderer holding the previous
//! snapshot keeps seeing a complete, consistent list.

use super::error::TodoError;
use super::item::{title_len, TodoId, TodoItem, MAX_TITLE_LEN};
use std::sync::Arc;

/// A user intent forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoIntent {
    Add { title: String },
    Delete { id: TodoId },
    SelectForEdit { id: TodoId },
    Update { title: String },
    CancelEdit,
    ToggleCompleted { id: TodoId },
}

#[derive(Debug, Clone, Default)]
pub struct TodoSnapshot {
    items: Arc<Vec<TodoItem>>,
    selection: Option<TodoId>,
    // Highest id handed out this session, so deleted ids are never reissued.
    last_id: TodoId,
}

impl TodoSnapshot {
    /// Build a snapshot from already validated items.
    pub(crate) fn from_items(items: Vec<TodoItem>) -> Self {
        let last_id = items.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            items: Arc::new(items),
            selection: None,
            last_id,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn selection(&self) -> Option<TodoId> {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.selection.and_then(|id| self.get(id))
    }

    /// Items ordered by descending id. The order is computed each time the
    /// returned view is iterated.
    pub fn list_ordered(&self) -> OrderedTodos {
        OrderedTodos {
            items: Arc::clone(&self.items),
        }
    }

    /// True when both snapshots share the same item storage.
    #[cfg(test)]
    pub fn same_items(&self, other: &TodoSnapshot) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    fn next_id(&self) -> TodoId {
        let max = self.items.iter().map(|t| t.id).max().unwrap_or(0);
        self.last_id.max(max) + 1
    }

    fn with_items(&self, items: Vec<TodoItem>, selection: Option<TodoId>) -> Self {
        let last_id = items
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        Self {
            items: Arc::new(items),
            selection,
            last_id,
        }
    }

    fn with_selection(&self, selection: Option<TodoId>) -> Self {
        Self {
            items: Arc::clone(&self.items),
            selection,
            last_id: self.last_id,
        }
    }

    fn added(&self, title: &str) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(TodoItem::new(self.next_id(), title));
        self.with_items(items, self.selection)
    }

    fn map_item(&self, id: TodoId, f: impl Fn(&TodoItem) -> TodoItem) -> Vec<TodoItem> {
        self.items
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect()
    }

    /// Apply one intent and return the resulting snapshot. Intents that refer
    /// to missing items, or an update without a selection, return an
    /// unchanged snapshot.
    pub fn reduce(&self, intent: &TodoIntent) -> Self {
        match intent {
            TodoIntent::Add { title } => self.added(title),
            TodoIntent::Delete { id } => {
                if self.get(*id).is_none() {
                    return self.clone();
                }
                let items = self.items.iter().filter(|t| t.id != *id).cloned().collect();
                let selection = self.selection.filter(|sel| sel != id);
                self.with_items(items, selection)
            }
            TodoIntent::SelectForEdit { id } => {
                if *id == 0 || self.get(*id).is_none() {
                    return self.clone();
                }
                self.with_selection(Some(*id))
            }
            TodoIntent::Update { title } => match self.selection {
                Some(id) if self.get(id).is_some() => {
                    let items = self.map_item(id, |t| t.with_title(title));
                    self.with_items(items, None)
                }
                Some(_) => self.with_selection(None),
                None => self.clone(),
            },
            TodoIntent::CancelEdit => {
                if self.selection.is_none() {
                    return self.clone();
                }
                self.with_selection(None)
            }
            TodoIntent::ToggleCompleted { id } => {
                if self.get(*id).is_none() {
                    return self.clone();
                }
                let items = self.map_item(*id, TodoItem::toggled);
                self.with_items(items, self.selection)
            }
        }
    }
}

/// Restartable view over a snapshot's items, most recently added first.
#[derive(Debug, Clone)]
pub struct OrderedTodos {
    items: Arc<Vec<TodoItem>>,
}

impl OrderedTodos {
    pub fn iter(&self) -> OrderedIter<'_> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|a, b| self.items[*b].id.cmp(&self.items[*a].id));
        OrderedIter {
            items: &self.items,
            order: order.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a OrderedTodos {
    type Item = &'a TodoItem;
    type IntoIter = OrderedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct OrderedIter<'a> {
    items: &'a [TodoItem],
    order: std::vec::IntoIter<usize>,
}

impl<'a> Iterator for OrderedIter<'a> {
    type Item = &'a TodoItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|i| &self.items[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for OrderedIter<'_> {}

/// Check a title against the bounds the strict operations enforce.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.trim().is_empty() {
        return Err(TodoError::BlankTitle);
    }
    let len = title_len(title);
    if len > MAX_TITLE_LEN {
        return Err(TodoError::TitleTooLong { len });
    }
    Ok(())
}

/// Owner of the current snapshot for one UI session.
#[derive(Debug, Default)]
pub struct TodoStore {
    snapshot: TodoSnapshot,
}

impl TodoStore {
    pub fn new(snapshot: TodoSnapshot) -> Self {
        Self { snapshot }
    }

    /// Cheap handle on the current state; later mutations do not affect it.
    pub fn snapshot(&self) -> TodoSnapshot {
        self.snapshot.clone()
    }

    pub fn current(&self) -> &TodoSnapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> Option<TodoId> {
        self.snapshot.selection()
    }

    pub fn list_ordered(&self) -> OrderedTodos {
        self.snapshot.list_ordered()
    }

    /// Run an intent through the reducer and swap in the result.
    pub fn dispatch(&mut self, intent: TodoIntent) {
        tracing::debug!(?intent, "dispatch");
        self.snapshot = self.snapshot.reduce(&intent);
    }

    pub fn add(&mut self, title: &str) -> TodoItem {
        let id = self.snapshot.next_id();
        self.dispatch(TodoIntent::Add {
            title: title.to_string(),
        });
        self.snapshot
            .get(id)
            .cloned()
            .unwrap_or_else(|| TodoItem::new(id, title))
    }

    pub fn delete(&mut self, id: TodoId) {
        self.dispatch(TodoIntent::Delete { id });
    }

    pub fn select_for_edit(&mut self, id: TodoId) {
        self.dispatch(TodoIntent::SelectForEdit { id });
    }

    pub fn update(&mut self, new_title: &str) {
        self.dispatch(TodoIntent::Update {
            title: new_title.to_string(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(TodoIntent::CancelEdit);
    }

    pub fn toggle_completed(&mut self, id: TodoId) {
        self.dispatch(TodoIntent::ToggleCompleted { id });
    }

    pub fn try_add(&mut self, title: &str) -> Result<TodoItem, TodoError> {
        validate_title(title)?;
        Ok(self.add(title))
    }

    pub fn try_update(&mut self, new_title: &str) -> Result<TodoItem, TodoError> {
        let id = self
            .snapshot
            .selected_item()
            .map(|t| t.id)
            .ok_or(TodoError::NoSelection)?;
        validate_title(new_title)?;
        self.update(new_title);
        self.snapshot.get(id).cloned().ok_or(TodoError::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(items: &[(TodoId, &str, bool)]) -> TodoStore {
        let items = items
            .iter()
            .map(|(id, title, completed)| TodoItem {
                id: *id,
                title: title.to_string(),
                completed: *completed,
            })
            .collect();
        TodoStore::new(TodoSnapshot::from_items(items))
    }

    fn ordered_ids(store: &TodoStore) -> Vec<TodoId> {
        store.list_ordered().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = TodoStore::default();
        let ids: Vec<_> = ["a", "b", "", "d"].iter().map(|t| store.add(t).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(store.current().get(3).is_some_and(|t| t.title.is_empty()));
        assert!(store.current().get(1).is_some_and(|t| !t.completed));
    }

    #[test]
    fn test_add_continues_after_seed_max() {
        let mut store = seeded(&[(7, "x", false), (3, "y", true)]);
        assert_eq!(store.add("z").id, 8);
    }

    #[test]
    fn test_deleted_ids_are_not_reissued() {
        let mut store = seeded(&[(1, "A", false)]);
        let b = store.add("B");
        store.delete(b.id);
        let c = store.add("C");
        assert_eq!(c.id, 3);
        assert_eq!(ordered_ids(&store), vec![3, 1]);
    }

    #[test]
    fn test_delete_removes_and_ignores_missing() {
        let mut store = seeded(&[(1, "A", false), (2, "B", false)]);
        store.delete(1);
        assert_eq!(ordered_ids(&store), vec![2]);

        let before = store.snapshot();
        store.delete(42);
        assert!(store.current().same_items(&before));
        assert_eq!(ordered_ids(&store), vec![2]);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut store = seeded(&[(1, "A", false), (2, "B", false)]);
        store.select_for_edit(2);
        store.delete(2);
        assert_eq!(store.selection(), None);

        let before = store.snapshot();
        store.update("ghost");
        assert!(store.current().same_items(&before));
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut store = seeded(&[(1, "A", false), (2, "B", false)]);
        store.select_for_edit(2);
        store.delete(1);
        assert_eq!(store.selection(), Some(2));
    }

    #[test]
    fn test_select_ignores_missing_and_zero() {
        let mut store = seeded(&[(1, "A", false)]);
        store.select_for_edit(9);
        assert_eq!(store.selection(), None);
        store.select_for_edit(0);
        assert_eq!(store.selection(), None);
        store.select_for_edit(1);
        store.select_for_edit(9);
        assert_eq!(store.selection(), Some(1));
    }

    #[test]
    fn test_update_changes_only_title() {
        let mut store = seeded(&[(1, "A", true), (2, "B", false)]);
        store.select_for_edit(1);
        store.update("X");
        let item = store.current().get(1).unwrap();
        assert_eq!(item.title, "X");
        assert!(item.completed);
        assert_eq!(store.current().get(2).unwrap().title, "B");
        assert_eq!(store.selection(), None);
    }

    #[test]
    fn test_update_without_selection_is_noop() {
        let mut store = seeded(&[(1, "A", false)]);
        let before = store.snapshot();
        store.update("X");
        assert!(store.current().same_items(&before));
        assert_eq!(store.current().get(1).unwrap().title, "A");
    }

    #[test]
    fn test_cancel_edit_clears_without_mutation() {
        let mut store = seeded(&[(1, "A", false)]);
        store.select_for_edit(1);
        let before = store.snapshot();
        store.cancel_edit();
        assert_eq!(store.selection(), None);
        assert!(store.current().same_items(&before));
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut store = seeded(&[(1, "A", false), (2, "B", true)]);
        store.toggle_completed(2);
        assert!(!store.current().get(2).unwrap().completed);
        store.toggle_completed(2);
        assert!(store.current().get(2).unwrap().completed);

        let before = store.snapshot();
        store.toggle_completed(5);
        assert!(store.current().same_items(&before));
    }

    #[test]
    fn test_list_ordered_is_descending_and_restartable() {
        let store = seeded(&[(2, "b", false), (5, "e", false), (1, "a", false)]);
        let view = store.list_ordered();
        let first: Vec<_> = view.iter().map(|t| t.id).collect();
        let second: Vec<_> = (&view).into_iter().map(|t| t.id).collect();
        assert_eq!(first, vec![5, 2, 1]);
        assert_eq!(first, second);
        assert_eq!(view.iter().len(), 3);
    }

    #[test]
    fn test_old_snapshot_is_unaffected() {
        let mut store = seeded(&[(1, "A", false)]);
        let reader = store.snapshot();
        store.toggle_completed(1);
        store.add("B");
        assert_eq!(reader.len(), 1);
        assert!(!reader.get(1).unwrap().completed);
        assert!(store.current().get(1).unwrap().completed);
    }

    #[test]
    fn test_seeded_scenario() {
        let mut store = seeded(&[(1, "A", false)]);
        let b = store.add("B");
        assert_eq!(b, TodoItem::new(2, "B"));
        assert_eq!(ordered_ids(&store), vec![2, 1]);

        store.toggle_completed(1);
        assert!(store.current().get(1).unwrap().completed);

        store.delete(2);
        assert_eq!(ordered_ids(&store), vec![1]);
    }

    #[test]
    fn test_reduce_matches_store_methods() {
        let start = TodoSnapshot::from_items(vec![TodoItem::new(1, "A")]);
        let next = start
            .reduce(&TodoIntent::Add { title: "B".into() })
            .reduce(&TodoIntent::SelectForEdit { id: 2 })
            .reduce(&TodoIntent::Update { title: "B2".into() })
            .reduce(&TodoIntent::ToggleCompleted { id: 1 });
        assert_eq!(start.len(), 1);
        assert_eq!(next.get(2).unwrap().title, "B2");
        assert!(next.get(1).unwrap().completed);
        assert_eq!(next.selection(), None);
        assert_eq!(next.remaining(), 1);
    }

    #[test]
    fn test_add_returns_item_created_by_reducer() {
        let start = TodoSnapshot::from_items(vec![TodoItem::new(4, "A")]);
        let reduced = start.reduce(&TodoIntent::Add { title: "B".into() });

        let mut store = TodoStore::new(start);
        let added = store.add("B");
        assert_eq!(Some(&added), reduced.get(5));
        assert_eq!(store.current().get(5), Some(&added));
        assert_eq!(store.current().len(), reduced.len());
    }

    #[test]
    fn test_try_add_rejects_blank_and_long() {
        let mut store = TodoStore::default();
        assert_eq!(store.try_add("   "), Err(TodoError::BlankTitle));
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(
            store.try_add(&long),
            Err(TodoError::TitleTooLong {
                len: MAX_TITLE_LEN + 1
            })
        );
        assert!(store.current().is_empty());
        assert_eq!(store.try_add(&"x".repeat(MAX_TITLE_LEN)).map(|t| t.id), Ok(1));
    }

    #[test]
    fn test_try_update_requires_selection() {
        let mut store = seeded(&[(1, "A", false)]);
        assert_eq!(store.try_update("X"), Err(TodoError::NoSelection));

        store.select_for_edit(1);
        assert_eq!(store.try_update(""), Err(TodoError::BlankTitle));
        assert_eq!(store.selection(), Some(1));

        let updated = store.try_update("X").unwrap();
        assert_eq!(updated.title, "X");
        assert_eq!(store.selection(), None);
    }
}

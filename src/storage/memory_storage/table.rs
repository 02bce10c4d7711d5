//! 单个实体集合
//!
//! 自增编号从 1 开始，删除后不会回收；记录按编号存放，
//! 因此遍历顺序与插入顺序一致。

use std::collections::BTreeMap;

#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// 分配下一个编号并写入由 `build` 构造的记录
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// 原地合并更新，记录不存在时返回 None
    pub(crate) fn update_with(&mut self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    pub(crate) fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub(crate) fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    pub(crate) fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    /// 删除第一条满足条件的记录
    pub(crate) fn remove_first(&mut self, predicate: impl Fn(&T) -> bool) -> bool {
        let id = self
            .rows
            .iter()
            .find(|(_, row)| predicate(row))
            .map(|(id, _)| *id);
        match id {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        tag: &'static str,
    }

    fn row(id: i64, tag: &'static str) -> Row {
        Row { id, tag }
    }

    #[test]
    fn test_ids_are_monotonic_across_deletes() {
        let mut table = Table::default();
        let a = table.insert_with(|id| row(id, "a"));
        let b = table.insert_with(|id| row(id, "b"));
        assert!(table.remove(b.id));
        let c = table.insert_with(|id| row(id, "c"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_missing_row_returns_none() {
        let mut table: Table<Row> = Table::default();
        assert!(table.update_with(42, |r| r.tag = "x").is_none());
    }

    #[test]
    fn test_remove_first_only_removes_one_match() {
        let mut table = Table::default();
        table.insert_with(|id| row(id, "dup"));
        table.insert_with(|id| row(id, "dup"));
        table.insert_with(|id| row(id, "other"));

        assert!(table.remove_first(|r| r.tag == "dup"));
        let rest = table.list();
        assert_eq!(rest, vec![row(2, "dup"), row(3, "other")]);
        assert!(table.remove_first(|r| r.tag == "dup"));
        assert!(!table.remove_first(|r| r.tag == "dup"));
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let mut table = Table::default();
        for tag in ["x", "y", "x", "y", "x"] {
            table.insert_with(|id| row(id, tag));
        }
        let ids: Vec<i64> = table.filter(|r| r.tag == "x").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}

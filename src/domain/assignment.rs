// ==========================================
// 教师任课分配引擎 - 任课记录领域模型
// ==========================================
// 红线: 每个 (班级, 科目) 最多一条任课记录
// 红线: 任课记录存在即表示已覆盖，不另设完成标记
// ==========================================
// AssignmentSet 以 (class_id, subject_id) 为键，唯一性由结构保证；
// 每条记录带插入序号，to_vec() 按序号还原列表顺序。
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// 任课记录: 某教师在某班级教授某科目
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub teacher_id: String,
    pub class_id: String,
    pub subject_id: String,
}

impl Assignment {
    pub fn new(
        teacher_id: impl Into<String>,
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            class_id: class_id.into(),
            subject_id: subject_id.into(),
        }
    }

    pub fn key(&self) -> AssignmentKey {
        AssignmentKey::new(&self.class_id, &self.subject_id)
    }
}

/// 单元格键 (班级, 科目)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentKey {
    pub class_id: String,
    pub subject_id: String,
}

impl AssignmentKey {
    pub fn new(class_id: &str, subject_id: &str) -> Self {
        Self {
            class_id: class_id.to_string(),
            subject_id: subject_id.to_string(),
        }
    }
}

/// 唯一性被绕过: 同一 (班级, 科目) 试图写入第二条记录
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("任课记录重复: class_id={class_id}, subject_id={subject_id}, existing_teacher={existing_teacher_id}")]
pub struct DuplicateAssignment {
    pub class_id: String,
    pub subject_id: String,
    pub existing_teacher_id: String,
}

#[derive(Debug, Clone)]
struct Cell {
    assignment: Assignment,
    seq: u64,
}

// ==========================================
// AssignmentSet - 任课记录集合
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AssignmentSet {
    cells: BTreeMap<AssignmentKey, Cell>,
    next_seq: u64,
    revision: u64, // 每次有效变更 +1（乐观并发令牌）
}

impl AssignmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由外部列表构建；列表本身违反唯一性时报错
    pub fn from_assignments<I>(assignments: I) -> Result<Self, DuplicateAssignment>
    where
        I: IntoIterator<Item = Assignment>,
    {
        let mut set = Self::new();
        for assignment in assignments {
            set.insert_new(assignment)?;
        }
        set.revision = 0;
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, class_id: &str, subject_id: &str) -> bool {
        self.cells.contains_key(&AssignmentKey::new(class_id, subject_id))
    }

    /// 当前负责该单元格的教师
    pub fn teacher_for(&self, class_id: &str, subject_id: &str) -> Option<&str> {
        self.cells
            .get(&AssignmentKey::new(class_id, subject_id))
            .map(|cell| cell.assignment.teacher_id.as_str())
    }

    /// 写入新记录；单元格已被占用时报错（不覆盖）
    pub fn insert_new(&mut self, assignment: Assignment) -> Result<(), DuplicateAssignment> {
        let key = assignment.key();
        if let Some(existing) = self.cells.get(&key) {
            return Err(DuplicateAssignment {
                class_id: key.class_id,
                subject_id: key.subject_id,
                existing_teacher_id: existing.assignment.teacher_id.clone(),
            });
        }
        self.push_cell(key, assignment);
        Ok(())
    }

    /// 替换写入；返回被替换的教师ID。被替换的记录不保留历史，新记录排到末尾
    pub fn replace(&mut self, assignment: Assignment) -> Option<String> {
        let key = assignment.key();
        let previous = self
            .cells
            .remove(&key)
            .map(|cell| cell.assignment.teacher_id);
        self.push_cell(key, assignment);
        previous
    }

    pub fn remove(&mut self, class_id: &str, subject_id: &str) -> Option<Assignment> {
        let removed = self
            .cells
            .remove(&AssignmentKey::new(class_id, subject_id))
            .map(|cell| cell.assignment);
        if removed.is_some() {
            self.revision += 1;
        }
        removed
    }

    /// 删除某教师的全部记录（按列表顺序返回被删除的记录）
    pub fn remove_teacher(&mut self, teacher_id: &str) -> Vec<Assignment> {
        self.remove_where(|a| a.teacher_id == teacher_id)
    }

    /// 删除某班级的全部记录（班级删除时级联）
    pub fn remove_class(&mut self, class_id: &str) -> Vec<Assignment> {
        self.remove_where(|a| a.class_id == class_id)
    }

    pub fn clear(&mut self) -> usize {
        let count = self.cells.len();
        if count > 0 {
            self.cells.clear();
            self.revision += 1;
        }
        count
    }

    /// 按键序遍历（不保证列表顺序）
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.cells.values().map(|cell| &cell.assignment)
    }

    pub fn for_teacher<'a>(&'a self, teacher_id: &'a str) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.iter().filter(move |a| a.teacher_id == teacher_id)
    }

    /// 按插入顺序导出
    pub fn to_vec(&self) -> Vec<Assignment> {
        let mut cells: Vec<&Cell> = self.cells.values().collect();
        cells.sort_by_key(|cell| cell.seq);
        cells.into_iter().map(|cell| cell.assignment.clone()).collect()
    }

    fn push_cell(&mut self, key: AssignmentKey, assignment: Assignment) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.cells.insert(key, Cell { assignment, seq });
        self.revision += 1;
    }

    fn remove_where<F>(&mut self, predicate: F) -> Vec<Assignment>
    where
        F: Fn(&Assignment) -> bool,
    {
        let mut removed: Vec<Cell> = Vec::new();
        self.cells.retain(|_, cell| {
            if predicate(&cell.assignment) {
                removed.push(cell.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.revision += 1;
        }
        removed.sort_by_key(|cell| cell.seq);
        removed.into_iter().map(|cell| cell.assignment).collect()
    }
}

//! Dependent-dropdown state for the program -> course -> subject
//! hierarchy.
//!
//! The whole hierarchy arrives in one embedded select; from then on every
//! recomputation is local. Selections are matched by record id, never by
//! display name. The invariant maintained throughout: a cleared level
//! means every deeper level is cleared too, and the option list of level
//! `k + 1` always reflects exactly the children of the selection at `k`.

use contracts::domain::common::{RecordId, SelectOption};
use contracts::domain::program::ProgramTree;

#[derive(Debug, Clone, PartialEq)]
pub struct CascadeNode {
    pub id: RecordId,
    pub label: String,
    pub children: Vec<CascadeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResolver {
    roots: Vec<CascadeNode>,
    selections: Vec<Option<SelectOption>>,
    options: Vec<Vec<SelectOption>>,
    loaded: bool,
}

impl CascadeResolver {
    /// `depth` is the number of rendered levels; the same hierarchy can
    /// back a 1, 2 or 3 level form.
    pub fn new(depth: usize) -> Self {
        Self {
            roots: Vec::new(),
            selections: vec![None; depth],
            options: vec![Vec::new(); depth],
            loaded: false,
        }
    }

    pub fn depth(&self) -> usize {
        self.selections.len()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Installs the hierarchy and resets all selections.
    pub fn load(&mut self, roots: Vec<CascadeNode>) {
        let depth = self.depth();
        self.roots = roots;
        self.loaded = true;
        self.selections = vec![None; depth];
        self.options = vec![Vec::new(); depth];
        self.options[0] = options_from(&self.roots);
    }

    /// Sets the selection at `level`, clears every deeper level and
    /// recomputes the option list of the next level from the children of
    /// the newly selected node. Out-of-range levels are ignored.
    pub fn select_at(&mut self, level: usize, option: Option<SelectOption>) {
        if level >= self.depth() {
            return;
        }

        self.selections[level] = option;
        for deeper in level + 1..self.depth() {
            self.selections[deeper] = None;
            self.options[deeper] = Vec::new();
        }

        if level + 1 < self.depth() {
            self.options[level + 1] = self
                .children_of_selection(level)
                .map(options_from)
                .unwrap_or_default();
        }
    }

    /// Applies a stored root-to-leaf id path in one pass, filling both
    /// selections and option lists. A stale id (row edited after its
    /// parent chain changed) leaves that level and everything deeper
    /// unselected and reports `false`; the caller surfaces a warning and
    /// the form stays usable.
    pub fn hydrate(&mut self, path: &[RecordId]) -> bool {
        let depth = self.depth();
        self.selections = vec![None; depth];
        self.options = vec![Vec::new(); depth];
        self.options[0] = options_from(&self.roots);

        let mut nodes: &[CascadeNode] = &self.roots;
        for (level, id) in path.iter().take(depth).enumerate() {
            self.options[level] = options_from(nodes);
            match nodes.iter().find(|node| node.id == *id) {
                Some(node) => {
                    self.selections[level] = Some(SelectOption::entity(node.id, &node.label));
                    nodes = &node.children;
                }
                None => return false,
            }
        }
        if path.len() < depth {
            self.options[path.len()] = options_from(nodes);
        }
        true
    }

    pub fn selection(&self, level: usize) -> Option<&SelectOption> {
        self.selections.get(level)?.as_ref()
    }

    pub fn selected_id(&self, level: usize) -> Option<RecordId> {
        self.selection(level)?.id
    }

    pub fn options(&self, level: usize) -> &[SelectOption] {
        self.options.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A level is interactive only once the hierarchy is loaded and its
    /// parent has a selection. Drives the "select the parent first"
    /// disabled state.
    pub fn is_enabled(&self, level: usize) -> bool {
        if !self.loaded || level >= self.depth() {
            return false;
        }
        level == 0 || self.selections[level - 1].is_some()
    }

    /// Sibling set at `level`, reached by walking the selected ids above.
    fn nodes_at_level(&self, level: usize) -> Option<&[CascadeNode]> {
        let mut nodes: &[CascadeNode] = &self.roots;
        for upper in 0..level {
            let id = self.selections.get(upper)?.as_ref()?.id?;
            nodes = &nodes.iter().find(|node| node.id == id)?.children;
        }
        Some(nodes)
    }

    fn children_of_selection(&self, level: usize) -> Option<&[CascadeNode]> {
        let id = self.selections.get(level)?.as_ref()?.id?;
        let nodes = self.nodes_at_level(level)?;
        Some(&nodes.iter().find(|node| node.id == id)?.children)
    }
}

fn options_from(nodes: &[CascadeNode]) -> Vec<SelectOption> {
    nodes
        .iter()
        .map(|node| SelectOption::entity(node.id, &node.label))
        .collect()
}

/// Hierarchy rows as fetched with `*, courses(*, subject(*))`.
pub fn nodes_from_programs(trees: &[ProgramTree]) -> Vec<CascadeNode> {
    trees
        .iter()
        .map(|program| CascadeNode {
            id: program.id,
            label: program.program_name.clone(),
            children: program
                .courses
                .iter()
                .map(|course| CascadeNode {
                    id: course.id,
                    label: course.course_name.clone(),
                    children: course
                        .subjects
                        .iter()
                        .map(|subject| CascadeNode {
                            id: subject.id,
                            label: subject.subject_name.clone(),
                            children: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, label: &str, children: Vec<CascadeNode>) -> CascadeNode {
        CascadeNode {
            id: RecordId(id),
            label: label.to_string(),
            children,
        }
    }

    fn sample() -> Vec<CascadeNode> {
        vec![
            node(
                1,
                "BSc",
                vec![
                    node(
                        11,
                        "Computer Science",
                        vec![node(111, "Algorithms", vec![]), node(112, "Databases", vec![])],
                    ),
                    node(12, "Mathematics", vec![node(121, "Calculus", vec![])]),
                ],
            ),
            node(2, "BA", vec![node(21, "History", vec![])]),
        ]
    }

    fn pick(resolver: &CascadeResolver, level: usize, id: i64) -> SelectOption {
        resolver
            .options(level)
            .iter()
            .find(|o| o.id == Some(RecordId(id)))
            .cloned()
            .unwrap()
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_load_exposes_roots_and_nothing_deeper() {
        let mut resolver = CascadeResolver::new(3);
        assert!(!resolver.is_enabled(0));

        resolver.load(sample());
        assert_eq!(labels(resolver.options(0)), vec!["BSc", "BA"]);
        assert!(resolver.options(1).is_empty());
        assert!(resolver.options(2).is_empty());
    }

    #[test]
    fn test_selecting_a_program_offers_its_courses() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        let bsc = pick(&resolver, 0, 1);
        resolver.select_at(0, Some(bsc));
        assert_eq!(
            labels(resolver.options(1)),
            vec!["Computer Science", "Mathematics"]
        );
        assert!(resolver.options(2).is_empty());
    }

    #[test]
    fn test_switching_program_clears_course_and_subject() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        resolver.select_at(0, Some(pick(&resolver, 0, 1)));
        resolver.select_at(1, Some(pick(&resolver, 1, 11)));
        resolver.select_at(2, Some(pick(&resolver, 2, 111)));
        assert_eq!(resolver.selected_id(2), Some(RecordId(111)));

        resolver.select_at(0, Some(pick(&resolver, 0, 2)));
        assert_eq!(resolver.selected_id(0), Some(RecordId(2)));
        assert_eq!(resolver.selection(1), None);
        assert_eq!(resolver.selection(2), None);
        assert_eq!(labels(resolver.options(1)), vec!["History"]);
        assert!(resolver.options(2).is_empty());
    }

    #[test]
    fn test_clearing_a_level_clears_descendants() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        resolver.select_at(0, Some(pick(&resolver, 0, 1)));
        resolver.select_at(1, Some(pick(&resolver, 1, 11)));
        resolver.select_at(0, None);

        assert_eq!(resolver.selection(0), None);
        assert_eq!(resolver.selection(1), None);
        assert!(resolver.options(1).is_empty());
    }

    #[test]
    fn test_enabled_only_with_loaded_hierarchy_and_selected_parent() {
        let mut resolver = CascadeResolver::new(2);
        assert!(!resolver.is_enabled(0));
        assert!(!resolver.is_enabled(1));

        resolver.load(sample());
        assert!(resolver.is_enabled(0));
        assert!(!resolver.is_enabled(1));

        resolver.select_at(0, Some(pick(&resolver, 0, 1)));
        assert!(resolver.is_enabled(1));
    }

    #[test]
    fn test_out_of_range_select_is_a_no_op() {
        let mut resolver = CascadeResolver::new(2);
        resolver.load(sample());
        let before = resolver.clone();
        resolver.select_at(5, Some(SelectOption::entity(RecordId(1), "BSc")));
        assert_eq!(resolver, before);
    }

    #[test]
    fn test_hydrate_fills_every_level() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        let ok = resolver.hydrate(&[RecordId(1), RecordId(11), RecordId(111)]);
        assert!(ok);
        assert_eq!(resolver.selection(0).unwrap().label, "BSc");
        assert_eq!(resolver.selection(1).unwrap().label, "Computer Science");
        assert_eq!(resolver.selection(2).unwrap().label, "Algorithms");
        assert_eq!(labels(resolver.options(2)), vec!["Algorithms", "Databases"]);
    }

    #[test]
    fn test_hydrate_with_stale_reference_degrades() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        let ok = resolver.hydrate(&[RecordId(1), RecordId(99), RecordId(111)]);
        assert!(!ok);
        assert_eq!(resolver.selected_id(0), Some(RecordId(1)));
        assert_eq!(resolver.selection(1), None);
        assert_eq!(resolver.selection(2), None);
        // siblings of the missing course are still offered for reselection
        assert_eq!(
            labels(resolver.options(1)),
            vec!["Computer Science", "Mathematics"]
        );
        assert!(resolver.options(2).is_empty());
    }

    #[test]
    fn test_hydrate_partial_path_prepares_next_level() {
        let mut resolver = CascadeResolver::new(3);
        resolver.load(sample());

        let ok = resolver.hydrate(&[RecordId(1)]);
        assert!(ok);
        assert_eq!(resolver.selected_id(0), Some(RecordId(1)));
        assert_eq!(
            labels(resolver.options(1)),
            vec!["Computer Science", "Mathematics"]
        );
    }

    #[test]
    fn test_option_values_carry_the_identifier() {
        let mut resolver = CascadeResolver::new(1);
        resolver.load(sample());
        let bsc = pick(&resolver, 0, 1);
        assert_eq!(bsc.value, "1");
    }

    #[test]
    fn test_nodes_from_embedded_select_shape() {
        let json = serde_json::json!([
            {
                "id": 1,
                "program_name": "BSc",
                "courses": [
                    {
                        "id": 11,
                        "course_name": "Computer Science",
                        "subject": [
                            { "id": 111, "subject_name": "Algorithms" }
                        ]
                    }
                ]
            }
        ]);
        let trees: Vec<ProgramTree> = serde_json::from_value(json).unwrap();
        let nodes = nodes_from_programs(&trees);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label, "BSc");
        assert_eq!(nodes[0].children[0].label, "Computer Science");
        assert_eq!(nodes[0].children[0].children[0].label, "Algorithms");
    }
}

/// Checklist permissions a role can grant on a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewChecklists,
    EditChecklists,
    DoneChecklists,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewChecklists => "view_checklists",
            Permission::EditChecklists => "edit_checklists",
            Permission::DoneChecklists => "done_checklists",
        }
    }
}

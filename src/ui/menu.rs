/// The closed set of top-level menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddDepartment => "Add a Department",
            MenuAction::AddRole => "Add a Role",
            MenuAction::AddEmployee => "Add an Employee",
            MenuAction::UpdateEmployeeRole => "Update an Employee Role",
            MenuAction::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|action| action.label()).collect()
    }

    /// Map a selected menu index back to its action.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

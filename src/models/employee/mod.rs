// Employee module

/// Staff shown as grid columns, in display order
pub const EMPLOYEES: [&str; 4] = ["Brenda Massey", "Alena Geidt", "James Herwitz", "Amy Jones"];

/// Work shift (班別). The set is fixed; labels are the zh-TW forms used
/// everywhere the row is displayed or exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Morning, // 早班
    Day,     // 中班
    Night,   // 晚班
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "早班",
            Shift::Day => "中班",
            Shift::Night => "晚班",
        }
    }

    /// Parse operator input: zh label or English name, case-insensitive.
    pub fn from_input(s: &str) -> Option<Self> {
        match s {
            "早班" => return Some(Shift::Morning),
            "中班" => return Some(Shift::Day),
            "晚班" => return Some(Shift::Night),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "morning" => Some(Shift::Morning),
            "day" => Some(Shift::Day),
            "night" => Some(Shift::Night),
            _ => None,
        }
    }
}

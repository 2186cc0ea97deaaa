//! Role and tab selectors. Each shell is a flat switch over a fixed set.

use crate::SenderRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Parent,
    Teacher,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Parent => "Parent",
            Role::Teacher => "Teacher",
        }
    }

    pub fn sender_role(&self) -> SenderRole {
        match self {
            Role::Parent => SenderRole::Parent,
            Role::Teacher => SenderRole::Teacher,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentTab {
    #[default]
    Home,
    Messages,
    Album,
    Notifications,
    Leave,
    Medicine,
}

impl ParentTab {
    /// Tabs reachable from the bottom bar; leave and medicine open from home
    pub const TAB_BAR: [ParentTab; 4] = [
        ParentTab::Home,
        ParentTab::Messages,
        ParentTab::Album,
        ParentTab::Notifications,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ParentTab::Home => "home",
            ParentTab::Messages => "messages",
            ParentTab::Album => "album",
            ParentTab::Notifications => "notifications",
            ParentTab::Leave => "leave",
            ParentTab::Medicine => "medicine",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(ParentTab::Home),
            "messages" => Some(ParentTab::Messages),
            "album" => Some(ParentTab::Album),
            "notifications" => Some(ParentTab::Notifications),
            "leave" => Some(ParentTab::Leave),
            "medicine" => Some(ParentTab::Medicine),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParentTab::Home => "Home",
            ParentTab::Messages => "Messages",
            ParentTab::Album => "Album",
            ParentTab::Notifications => "More",
            ParentTab::Leave => "Leave Request",
            ParentTab::Medicine => "Medicine",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeacherTab {
    #[default]
    Home,
    Messages,
    Album,
    Notifications,
}

impl TeacherTab {
    pub const TAB_BAR: [TeacherTab; 4] = [
        TeacherTab::Home,
        TeacherTab::Messages,
        TeacherTab::Album,
        TeacherTab::Notifications,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TeacherTab::Home => "home",
            TeacherTab::Messages => "messages",
            TeacherTab::Album => "album",
            TeacherTab::Notifications => "notifications",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(TeacherTab::Home),
            "messages" => Some(TeacherTab::Messages),
            "album" => Some(TeacherTab::Album),
            "notifications" => Some(TeacherTab::Notifications),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeacherTab::Home => "Home",
            TeacherTab::Messages => "Messages",
            TeacherTab::Album => "Album",
            TeacherTab::Notifications => "More",
        }
    }
}

use std::fmt;

/// A named REST resource exposed under `/api/<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Collection {
    pub name: &'static str,
    pub entity: &'static str,
}

impl Collection {
    const fn new(name: &'static str, entity: &'static str) -> Self {
        Self { name, entity }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.name == name)
    }

    pub fn by_entity(entity: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.entity == entity)
    }

    /// Users carry credentials and are served by dedicated handlers.
    pub fn is_generic(&self) -> bool {
        self.name != USERS.name
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const USERS: Collection = Collection::new("users", "User");
pub const CONTACTS: Collection = Collection::new("contacts", "Contact");
pub const MOTIONS: Collection = Collection::new("motions", "Motion");
pub const MEETINGS: Collection = Collection::new("meetings", "Meeting");
pub const COMMUNICATIONS: Collection = Collection::new("communications", "Communication");
pub const TASKS: Collection = Collection::new("tasks", "Task");
pub const DOCUMENTS: Collection = Collection::new("documents", "Document");
pub const CAMPAIGNS: Collection = Collection::new("campaigns", "Campaign");
pub const CAMPAIGN_EVENTS: Collection = Collection::new("campaign_events", "CampaignEvent");
pub const CAMPAIGN_EXPENSES: Collection = Collection::new("campaign_expenses", "CampaignExpense");
pub const VOLUNTEERS: Collection = Collection::new("volunteers", "Volunteer");
pub const ORGANIZATIONS: Collection = Collection::new("organizations", "Organization");
pub const FRACTION_MEETINGS: Collection = Collection::new("fraction_meetings", "FractionMeeting");
pub const FRACTION_MEETING_TEMPLATES: Collection =
    Collection::new("fraction_meeting_templates", "FractionMeetingTemplate");
pub const MEMBER_GROUPS: Collection = Collection::new("member_groups", "MemberGroup");
pub const MEDIA_POSTS: Collection = Collection::new("media_posts", "MediaPost");
pub const PRINT_TEMPLATES: Collection = Collection::new("print_templates", "PrintTemplate");
pub const APP_SETTINGS: Collection = Collection::new("app_settings", "AppSettings");
pub const INVOICES: Collection = Collection::new("invoices", "Invoice");
pub const SUPPORT_TICKETS: Collection = Collection::new("support_tickets", "SupportTicket");
pub const EMAIL_LOGS: Collection = Collection::new("email_logs", "EmailLog");
pub const SYSTEM_LOGS: Collection = Collection::new("system_logs", "SystemLog");
pub const WORKFLOW_RULES: Collection = Collection::new("workflow_rules", "WorkflowRule");
pub const MANDATE_LEVIES: Collection = Collection::new("mandate_levies", "MandateLevy");
pub const LEVY_RULES: Collection = Collection::new("levy_rules", "LevyRule");
pub const INCOMES: Collection = Collection::new("incomes", "Income");
pub const EXPENSES: Collection = Collection::new("expenses", "Expense");
pub const RECEIPTS: Collection = Collection::new("receipts", "Receipt");
pub const BUDGETS: Collection = Collection::new("budgets", "Budget");

pub const ALL: &[Collection] = &[
    USERS,
    CONTACTS,
    MOTIONS,
    MEETINGS,
    COMMUNICATIONS,
    TASKS,
    DOCUMENTS,
    CAMPAIGNS,
    CAMPAIGN_EVENTS,
    CAMPAIGN_EXPENSES,
    VOLUNTEERS,
    ORGANIZATIONS,
    FRACTION_MEETINGS,
    FRACTION_MEETING_TEMPLATES,
    MEMBER_GROUPS,
    MEDIA_POSTS,
    PRINT_TEMPLATES,
    APP_SETTINGS,
    INVOICES,
    SUPPORT_TICKETS,
    EMAIL_LOGS,
    SYSTEM_LOGS,
    WORKFLOW_RULES,
    MANDATE_LEVIES,
    LEVY_RULES,
    INCOMES,
    EXPENSES,
    RECEIPTS,
    BUDGETS,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_entities_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|c| c.name).collect();
        let entities: HashSet<_> = ALL.iter().map(|c| c.entity).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(entities.len(), ALL.len());
    }

    #[test]
    fn lookup_by_name_and_entity() {
        assert_eq!(Collection::by_name("mandate_levies"), Some(MANDATE_LEVIES));
        assert_eq!(Collection::by_entity("SupportTicket"), Some(SUPPORT_TICKETS));
        assert_eq!(Collection::by_name("secrets"), None);
    }

    #[test]
    fn only_users_are_special() {
        assert!(!USERS.is_generic());
        assert!(ALL.iter().filter(|c| !c.is_generic()).count() == 1);
    }
}

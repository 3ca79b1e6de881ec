//! Validation badges: one boolean indicator per checked lead field.

use crate::lead::Lead;

/// Which field a badge reports on. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Email,
    Phone,
    LinkedIn,
    Contact,
    Pricing,
}

impl BadgeKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BadgeKind::Email => "Email",
            BadgeKind::Phone => "Phone",
            BadgeKind::LinkedIn => "LinkedIn",
            BadgeKind::Contact => "Contact",
            BadgeKind::Pricing => "Pricing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub ok: bool,
}

impl Badge {
    #[must_use]
    pub fn label(self) -> &'static str {
        self.kind.label()
    }

    /// CSS state class: `ok` for a present field, `warn` otherwise.
    #[must_use]
    pub fn state_class(self) -> &'static str {
        if self.ok {
            "ok"
        } else {
            "warn"
        }
    }
}

/// Always returns five badges in the order Email, Phone, `LinkedIn`, Contact, Pricing.
#[must_use]
pub fn validation_badges(lead: &Lead) -> [Badge; 5] {
    [
        Badge {
            kind: BadgeKind::Email,
            ok: lead.has_emails(),
        },
        Badge {
            kind: BadgeKind::Phone,
            ok: lead.has_phones(),
        },
        Badge {
            kind: BadgeKind::LinkedIn,
            ok: lead.has_linkedin(),
        },
        Badge {
            kind: BadgeKind::Contact,
            ok: lead.has_contact_page,
        },
        Badge {
            kind: BadgeKind::Pricing,
            ok: lead.has_pricing,
        },
    ]
}

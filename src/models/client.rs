use serde::Serialize;

/// The eleven fixed revenue sources. The declaration order is the column order
/// used by the store and by every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Client {
    U,
    De,
    R,
    W,
    Menu,
    Shonpi,
    Afrex,
    Afresh,
    Hacobell,
    Pickg,
    Other,
}

impl Client {
    pub const ALL: [Client; 11] = [
        Client::U,
        Client::De,
        Client::R,
        Client::W,
        Client::Menu,
        Client::Shonpi,
        Client::Afrex,
        Client::Afresh,
        Client::Hacobell,
        Client::Pickg,
        Client::Other,
    ];

    /// Column name in the `records` table
    pub fn column(&self) -> &'static str {
        match self {
            Client::U => "u",
            Client::De => "de",
            Client::R => "r",
            Client::W => "w",
            Client::Menu => "menu",
            Client::Shonpi => "shonpi",
            Client::Afrex => "afrex",
            Client::Afresh => "afresh",
            Client::Hacobell => "hacobell",
            Client::Pickg => "pickg",
            Client::Other => "other",
        }
    }

    /// Human-readable label used in reports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Client::U => "U",
            Client::De => "De",
            Client::R => "R",
            Client::W => "W",
            Client::Menu => "Menu",
            Client::Shonpi => "Shonpi",
            Client::Afrex => "Afrex",
            Client::Afresh => "Afresh",
            Client::Hacobell => "Hacobell",
            Client::Pickg => "Pickg",
            Client::Other => "Other",
        }
    }

    /// Convert CLI input (column name or label, any case) → enum
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Client::ALL.into_iter().find(|c| c.column() == code)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-client revenue for one day. Never-entered clients hold zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientRevenue([i64; 11]);

impl ClientRevenue {
    pub fn get(&self, client: Client) -> i64 {
        self.0[client.index()]
    }

    pub fn set(&mut self, client: Client, amount: i64) {
        self.0[client.index()] = amount;
    }

    pub fn total(&self) -> i64 {
        self.0.iter().fold(0, |acc, v| acc.saturating_add(*v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Client, i64)> + '_ {
        Client::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Nonzero contributors, largest first. Ties keep column order.
    pub fn nonzero_desc(&self) -> Vec<(Client, i64)> {
        let mut parts: Vec<(Client, i64)> = self.iter().filter(|(_, v)| *v != 0).collect();
        parts.sort_by(|a, b| b.1.cmp(&a.1));
        parts
    }
}

impl FromIterator<(Client, i64)> for ClientRevenue {
    fn from_iter<I: IntoIterator<Item = (Client, i64)>>(iter: I) -> Self {
        let mut out = ClientRevenue::default();
        for (c, v) in iter {
            out.set(c, v);
        }
        out
    }
}

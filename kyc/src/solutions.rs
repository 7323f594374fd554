//! Addable solutions and the selection flags sent with a submission.

#[cfg(test)]
#[path = "solutions_test.rs"]
mod solutions_test;

use serde::{Deserialize, Serialize};

/// Display grouping for the solutions step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolutionCategory {
    Platform,
    Games,
    PaymentSecurity,
    PremiumAddOns,
    RegulatoryDevelopment,
}

impl SolutionCategory {
    pub const ALL: [Self; 5] = [
        Self::Platform,
        Self::Games,
        Self::PaymentSecurity,
        Self::PremiumAddOns,
        Self::RegulatoryDevelopment,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Platform => "Platform Solutions",
            Self::Games => "Game Solutions",
            Self::PaymentSecurity => "Payment & Security",
            Self::PremiumAddOns => "Premium Add-Ons",
            Self::RegulatoryDevelopment => "Regulatory & Development",
        }
    }

    /// Solutions in this category, in display order.
    pub fn solutions(self) -> impl Iterator<Item = Solution> {
        Solution::ALL.into_iter().filter(move |s| s.category() == self)
    }
}

/// One addable product. Declaration order is the order labels are listed in
/// the forwarded sheet record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solution {
    WhiteLabel,
    Exchange,
    CasinoGames,
    CustomGame,
    PaymentGateway,
    FraudDetection,
    ExchangeApi,
    MobileApps,
    LiveDealer,
    Regulatory,
    CustomPayment,
    DevTeam,
}

impl Solution {
    pub const ALL: [Self; 12] = [
        Self::WhiteLabel,
        Self::Exchange,
        Self::CasinoGames,
        Self::CustomGame,
        Self::PaymentGateway,
        Self::FraudDetection,
        Self::ExchangeApi,
        Self::MobileApps,
        Self::LiveDealer,
        Self::Regulatory,
        Self::CustomPayment,
        Self::DevTeam,
    ];

    /// JSON flag name.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::WhiteLabel => "whiteLabel",
            Self::Exchange => "exchange",
            Self::CasinoGames => "casinoGames",
            Self::CustomGame => "customGame",
            Self::PaymentGateway => "paymentGateway",
            Self::FraudDetection => "fraudDetection",
            Self::ExchangeApi => "exchangeApi",
            Self::MobileApps => "mobileApps",
            Self::LiveDealer => "liveDealer",
            Self::Regulatory => "regulatory",
            Self::CustomPayment => "customPayment",
            Self::DevTeam => "devTeam",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WhiteLabel => "White-Label Casino Platform",
            Self::Exchange => "Exchange Solutions",
            Self::CasinoGames => "Casino Games (1,000+ titles)",
            Self::CustomGame => "Custom Game Development",
            Self::PaymentGateway => "Payment Gateway Integration",
            Self::FraudDetection => "AI-Powered Fraud Detection",
            Self::ExchangeApi => "Exchange API",
            Self::MobileApps => "White-Label Mobile Apps",
            Self::LiveDealer => "Live Dealer Studio Setup",
            Self::Regulatory => "Regulatory Consultation",
            Self::CustomPayment => "Custom Payment Integration",
            Self::DevTeam => "Dedicated Development Team",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::WhiteLabel => "Fully-branded, turnkey platform",
            Self::Exchange => "Sports betting with live odds",
            Self::CasinoGames => "Slots, table games, live dealers",
            Self::CustomGame => "Tailored games for your brand",
            Self::PaymentGateway => "Multi-currency, fiat & crypto",
            Self::FraudDetection => "Real-time fraud prevention",
            Self::ExchangeApi => "Automated odds & dashboard",
            Self::MobileApps => "Custom Android & iOS apps",
            Self::LiveDealer => "Complete studio setup",
            Self::Regulatory => "Licensing & compliance guidance",
            Self::CustomPayment => "Local payment methods",
            Self::DevTeam => "Full-time dev & QA team",
        }
    }

    #[must_use]
    pub fn category(self) -> SolutionCategory {
        match self {
            Self::WhiteLabel | Self::Exchange => SolutionCategory::Platform,
            Self::CasinoGames | Self::CustomGame => SolutionCategory::Games,
            Self::PaymentGateway | Self::FraudDetection => SolutionCategory::PaymentSecurity,
            Self::ExchangeApi | Self::MobileApps | Self::LiveDealer => SolutionCategory::PremiumAddOns,
            Self::Regulatory | Self::CustomPayment | Self::DevTeam => SolutionCategory::RegulatoryDevelopment,
        }
    }
}

/// One boolean flag per [`Solution`]. Serializes as the 12-flag JSON object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SolutionsSelection {
    pub white_label: bool,
    pub exchange: bool,
    pub casino_games: bool,
    pub custom_game: bool,
    pub payment_gateway: bool,
    pub fraud_detection: bool,
    pub exchange_api: bool,
    pub mobile_apps: bool,
    pub live_dealer: bool,
    pub regulatory: bool,
    pub custom_payment: bool,
    pub dev_team: bool,
}

impl SolutionsSelection {
    #[must_use]
    pub fn is_selected(&self, solution: Solution) -> bool {
        match solution {
            Solution::WhiteLabel => self.white_label,
            Solution::Exchange => self.exchange,
            Solution::CasinoGames => self.casino_games,
            Solution::CustomGame => self.custom_game,
            Solution::PaymentGateway => self.payment_gateway,
            Solution::FraudDetection => self.fraud_detection,
            Solution::ExchangeApi => self.exchange_api,
            Solution::MobileApps => self.mobile_apps,
            Solution::LiveDealer => self.live_dealer,
            Solution::Regulatory => self.regulatory,
            Solution::CustomPayment => self.custom_payment,
            Solution::DevTeam => self.dev_team,
        }
    }

    pub fn set(&mut self, solution: Solution, selected: bool) {
        let flag = match solution {
            Solution::WhiteLabel => &mut self.white_label,
            Solution::Exchange => &mut self.exchange,
            Solution::CasinoGames => &mut self.casino_games,
            Solution::CustomGame => &mut self.custom_game,
            Solution::PaymentGateway => &mut self.payment_gateway,
            Solution::FraudDetection => &mut self.fraud_detection,
            Solution::ExchangeApi => &mut self.exchange_api,
            Solution::MobileApps => &mut self.mobile_apps,
            Solution::LiveDealer => &mut self.live_dealer,
            Solution::Regulatory => &mut self.regulatory,
            Solution::CustomPayment => &mut self.custom_payment,
            Solution::DevTeam => &mut self.dev_team,
        };
        *flag = selected;
    }

    /// Satisfied when at least one flag is set.
    #[must_use]
    pub fn any(&self) -> bool {
        Solution::ALL.iter().any(|s| self.is_selected(*s))
    }

    /// Selected solutions in declaration order.
    pub fn selected(&self) -> impl Iterator<Item = Solution> + '_ {
        Solution::ALL.into_iter().filter(|s| self.is_selected(*s))
    }

    /// Comma-joined labels of the selected solutions.
    #[must_use]
    pub fn labels(&self) -> String {
        self.selected().map(Solution::label).collect::<Vec<_>>().join(", ")
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

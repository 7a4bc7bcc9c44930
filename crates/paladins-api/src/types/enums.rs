/*
[INPUT]:  Numeric ids used by the Paladins API
[OUTPUT]: Typed Rust enums with id conversions and serde support
[POS]:    Data layer - static lookup tables
[UPDATE]: When the game adds languages, portals, queues or ranks
*/

use serde::{Deserialize, Serialize};

/// Language used for localized endpoint payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Chinese,
    Spanish,
    Portuguese,
    Russian,
    Polish,
    Turkish,
}

impl Language {
    pub fn id(self) -> u32 {
        match self {
            Language::English => 1,
            Language::German => 2,
            Language::French => 3,
            Language::Chinese => 5,
            Language::Spanish => 9,
            Language::Portuguese => 10,
            Language::Russian => 11,
            Language::Polish => 12,
            Language::Turkish => 13,
        }
    }
}

impl TryFrom<u32> for Language {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Ok(match id {
            1 => Language::English,
            2 => Language::German,
            3 => Language::French,
            5 => Language::Chinese,
            9 => Language::Spanish,
            10 => Language::Portuguese,
            11 => Language::Russian,
            12 => Language::Polish,
            13 => Language::Turkish,
            other => return Err(format!("unknown language id {other}")),
        })
    }
}

impl From<Language> for u32 {
    fn from(language: Language) -> Self {
        language.id()
    }
}

/// Account portal (platform) a player signs in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Portal {
    Unknown,
    HiRez,
    Steam,
    Psn,
    XboxLive,
    Facebook,
    Google,
    Mixer,
    Nintendo,
    Discord,
    Epic,
}

impl Portal {
    pub fn id(self) -> u32 {
        match self {
            Portal::Unknown => 0,
            Portal::HiRez => 1,
            Portal::Steam => 5,
            Portal::Psn => 9,
            Portal::XboxLive => 10,
            Portal::Facebook => 12,
            Portal::Google => 13,
            Portal::Mixer => 14,
            Portal::Nintendo => 22,
            Portal::Discord => 25,
            Portal::Epic => 28,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Portal::Unknown => "Unknown",
            Portal::HiRez => "PC",
            Portal::Steam => "Steam",
            Portal::Psn => "PSN",
            Portal::XboxLive => "XboxLive",
            Portal::Facebook => "Facebook",
            Portal::Google => "Google",
            Portal::Mixer => "Mixer",
            Portal::Nintendo => "Nintendo",
            Portal::Discord => "Discord",
            Portal::Epic => "Epic",
        }
    }
}

impl TryFrom<u32> for Portal {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Portal::Unknown,
            1 => Portal::HiRez,
            5 => Portal::Steam,
            9 => Portal::Psn,
            10 => Portal::XboxLive,
            12 => Portal::Facebook,
            13 => Portal::Google,
            14 => Portal::Mixer,
            22 => Portal::Nintendo,
            25 => Portal::Discord,
            28 => Portal::Epic,
            other => return Err(format!("unknown portal id {other}")),
        })
    }
}

impl From<Portal> for u32 {
    fn from(portal: Portal) -> Self {
        portal.id()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Queue {
    Unknown,
    CasualSiege,
    TrainingSiege,
    RankedController,
    ShootingRange,
    TestMaps,
    Onslaught,
    TrainingOnslaught,
    TeamDeathmatch,
    TrainingTeamDeathmatch,
    RankedKeyboard,
}

impl Queue {
    pub fn id(self) -> u32 {
        match self {
            Queue::Unknown => 0,
            Queue::CasualSiege => 424,
            Queue::TrainingSiege => 425,
            Queue::RankedController => 428,
            Queue::ShootingRange => 434,
            Queue::TestMaps => 445,
            Queue::Onslaught => 452,
            Queue::TrainingOnslaught => 453,
            Queue::TeamDeathmatch => 469,
            Queue::TrainingTeamDeathmatch => 470,
            Queue::RankedKeyboard => 486,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Queue::Unknown => "Unknown",
            Queue::CasualSiege => "Casual Siege",
            Queue::TrainingSiege => "Training Siege",
            Queue::RankedController => "Ranked Controller",
            Queue::ShootingRange => "Shooting Range",
            Queue::TestMaps => "Test Maps",
            Queue::Onslaught => "Onslaught",
            Queue::TrainingOnslaught => "Training Onslaught",
            Queue::TeamDeathmatch => "Team Deathmatch",
            Queue::TrainingTeamDeathmatch => "Training Team Deathmatch",
            Queue::RankedKeyboard => "Ranked Keyboard",
        }
    }
}

impl TryFrom<u32> for Queue {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Queue::Unknown,
            424 => Queue::CasualSiege,
            425 => Queue::TrainingSiege,
            428 => Queue::RankedController,
            434 => Queue::ShootingRange,
            445 => Queue::TestMaps,
            452 => Queue::Onslaught,
            453 => Queue::TrainingOnslaught,
            469 => Queue::TeamDeathmatch,
            470 => Queue::TrainingTeamDeathmatch,
            486 => Queue::RankedKeyboard,
            other => return Err(format!("unknown queue id {other}")),
        })
    }
}

impl From<Queue> for u32 {
    fn from(queue: Queue) -> Self {
        queue.id()
    }
}

/// Value of `status` in `getplayerstatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ProfileState {
    Offline,
    InLobby,
    ChampionSelection,
    InMatch,
    Online,
    Unknown,
}

impl TryFrom<u32> for ProfileState {
    type Error = String;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => ProfileState::Offline,
            1 => ProfileState::InLobby,
            2 => ProfileState::ChampionSelection,
            3 => ProfileState::InMatch,
            4 => ProfileState::Online,
            5 => ProfileState::Unknown,
            other => return Err(format!("unknown profile state {other}")),
        })
    }
}

impl From<ProfileState> for u32 {
    fn from(state: ProfileState) -> Self {
        match state {
            ProfileState::Offline => 0,
            ProfileState::InLobby => 1,
            ProfileState::ChampionSelection => 2,
            ProfileState::InMatch => 3,
            ProfileState::Online => 4,
            ProfileState::Unknown => 5,
        }
    }
}

const RANK_NAMES: [&str; 28] = [
    "Qualifying",
    "Bronze V",
    "Bronze IV",
    "Bronze III",
    "Bronze II",
    "Bronze I",
    "Silver V",
    "Silver IV",
    "Silver III",
    "Silver II",
    "Silver I",
    "Gold V",
    "Gold IV",
    "Gold III",
    "Gold II",
    "Gold I",
    "Platinum V",
    "Platinum IV",
    "Platinum III",
    "Platinum II",
    "Platinum I",
    "Diamond V",
    "Diamond IV",
    "Diamond III",
    "Diamond II",
    "Diamond I",
    "Master",
    "Grandmaster",
];

/// Ranked tier, 0 (qualifying) through 27 (grandmaster)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u8);

impl Rank {
    pub const QUALIFYING: Rank = Rank(0);
    pub const GRANDMASTER: Rank = Rank(27);

    pub fn tier(self) -> u32 {
        u32::from(self.0)
    }

    pub fn name(self) -> &'static str {
        RANK_NAMES[usize::from(self.0)]
    }
}

impl TryFrom<u32> for Rank {
    type Error = String;

    fn try_from(tier: u32) -> Result<Self, Self::Error> {
        u8::try_from(tier)
            .ok()
            .filter(|t| usize::from(*t) < RANK_NAMES.len())
            .map(Rank)
            .ok_or_else(|| format!("unknown rank tier {tier}"))
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.tier()
    }
}

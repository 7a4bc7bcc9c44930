/*
[INPUT]:  Player, champion and match identifiers
[OUTPUT]: Decoded endpoint payloads
[POS]:    HTTP layer - thin endpoint wrappers over the signed call pipeline
[UPDATE]: When adding new endpoints or changing their argument mapping
*/

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::http::url_builder::{UrlArgs, join_ids};
use crate::http::{PaladinsClient, Result};
use crate::types::{
    ChampionSummary, DataUsage, PlayerIdInfo, PlayerStatus, Portal, Queue, SearchPlayer,
};

// ### Game data

impl PaladinsClient {
    /// gettopmatches
    pub async fn get_top_matches(&self) -> Result<Vec<Value>> {
        self.call("gettopmatches", &UrlArgs::new()).await
    }

    /// getchampions/{language}
    pub async fn get_champions(&self) -> Result<Vec<ChampionSummary>> {
        let args = UrlArgs::new().language(self.language().id());
        self.call("getchampions", &args).await
    }

    /// getchampioncards/{champion}/{language}
    pub async fn get_champion_cards(&self, champion_id: u32) -> Result<Vec<Value>> {
        let args = UrlArgs::new()
            .champion(champion_id)
            .language(self.language().id());
        self.call("getchampioncards", &args).await
    }

    /// getchampionskins/{champion}/{language}
    pub async fn get_champion_skins(&self, champion_id: u32) -> Result<Vec<Value>> {
        let args = UrlArgs::new()
            .champion(champion_id)
            .language(self.language().id());
        self.call("getchampionskins", &args).await
    }

    /// getitems/{language}
    pub async fn get_items(&self) -> Result<Vec<Value>> {
        let args = UrlArgs::new().language(self.language().id());
        self.call("getitems", &args).await
    }

    /// getbountyitems
    pub async fn get_bounty_items(&self) -> Result<Vec<Value>> {
        self.call("getbountyitems", &UrlArgs::new()).await
    }

    /// getdataused
    pub async fn get_data_usage(&self) -> Result<DataUsage> {
        self.call_first("getdataused", &UrlArgs::new()).await
    }
}

// ### Players

impl PaladinsClient {
    /// getplayer/{player}
    ///
    /// Fails with `NotFound` when no such player exists and with
    /// `PrivateProfile` when the profile is hidden.
    pub async fn get_player(&self, player: impl ToString) -> Result<Value> {
        self.call_first("getplayer", &UrlArgs::new().player(player)).await
    }

    /// getplayerbatch/{id,id,...}
    pub async fn get_player_batch(&self, player_ids: &[u64]) -> Result<Vec<Value>> {
        let args = UrlArgs::new().player(join_ids(player_ids));
        self.call("getplayerbatch", &args).await
    }

    /// getplayeridbyname/{name}
    pub async fn get_player_id_by_name(&self, name: &str) -> Result<Vec<PlayerIdInfo>> {
        self.call("getplayeridbyname", &UrlArgs::new().player(name)).await
    }

    /// getplayeridbyportaluserid/{portal}/{portal_user_id}
    ///
    /// PC and PSN only.
    pub async fn get_player_id_by_portal_user_id(
        &self,
        portal_user_id: &str,
        portal: Portal,
    ) -> Result<Vec<PlayerIdInfo>> {
        let args = UrlArgs::new().platform(portal.id()).player(portal_user_id);
        self.call("getplayeridbyportaluserid", &args).await
    }

    /// getplayeridsbygamertag/{portal}/{gamertag}
    pub async fn get_player_ids_by_gamertag(
        &self,
        gamertag: &str,
        portal: Portal,
    ) -> Result<Vec<PlayerIdInfo>> {
        let args = UrlArgs::new().platform(portal.id()).player(gamertag);
        self.call("getplayeridsbygamertag", &args).await
    }

    /// getplayeridinfoforxboxandswitch/{name}
    pub async fn get_player_id_info_for_xbox_and_switch(
        &self,
        name: &str,
    ) -> Result<Vec<PlayerIdInfo>> {
        let args = UrlArgs::new().player(name);
        self.call("getplayeridinfoforxboxandswitch", &args).await
    }

    /// searchplayers/{name}
    pub async fn search_players(&self, name: &str) -> Result<Vec<SearchPlayer>> {
        self.call("searchplayers", &UrlArgs::new().player(name)).await
    }

    /// getfriends/{player}
    pub async fn get_player_friends(&self, player_id: u64) -> Result<Vec<Value>> {
        self.call("getfriends", &UrlArgs::new().player(player_id)).await
    }

    /// getchampionranks/{player}
    pub async fn get_player_champion_ranks(&self, player_id: u64) -> Result<Vec<Value>> {
        self.call("getchampionranks", &UrlArgs::new().player(player_id)).await
    }

    /// getplayerloadouts/{player}/{language}
    pub async fn get_player_loadouts(&self, player_id: u64) -> Result<Vec<Value>> {
        let args = UrlArgs::new()
            .player(player_id)
            .language(self.language().id());
        self.call("getplayerloadouts", &args).await
    }

    /// getplayerstatus/{player}
    pub async fn get_player_status(&self, player_id: u64) -> Result<PlayerStatus> {
        self.call_first("getplayerstatus", &UrlArgs::new().player(player_id)).await
    }

    /// getmatchhistory/{player}
    pub async fn get_player_match_history(&self, player_id: u64) -> Result<Vec<Value>> {
        self.call("getmatchhistory", &UrlArgs::new().player(player_id)).await
    }

    /// getqueuestats/{player}/{queue}
    pub async fn get_player_queue_stats(
        &self,
        player_id: u64,
        queue: Queue,
    ) -> Result<Vec<Value>> {
        let args = UrlArgs::new().player(player_id).queue(queue.id());
        self.call("getqueuestats", &args).await
    }
}

// ### Matches

impl PaladinsClient {
    /// getmodedetails/{match}
    pub async fn get_match_mode_details(&self, match_id: u64) -> Result<Vec<Value>> {
        // The service expects the match id in the player position here.
        self.call("getmodedetails", &UrlArgs::new().player(match_id)).await
    }

    /// getmatchdetails/{match}
    pub async fn get_match_details(&self, match_id: u64) -> Result<Vec<Value>> {
        self.call("getmatchdetails", &UrlArgs::new().match_id(match_id)).await
    }

    /// getmatchdetailsbatch/{id,id,...}, grouped by match id
    pub async fn get_match_details_batch(
        &self,
        match_ids: &[u64],
    ) -> Result<BTreeMap<String, Vec<Value>>> {
        let args = UrlArgs::new().match_ids(match_ids);
        self.call_grouped("getmatchdetailsbatch", &args, "Match").await
    }

    /// getmatchidsbyqueue/{queue}/{date}/{hour}
    ///
    /// `hour` is `0`..`23`, `-1` for the whole day, or a ten-minute window
    /// such as `3,00`.
    pub async fn get_match_ids_by_queue(
        &self,
        queue: Queue,
        date: NaiveDate,
        hour: &str,
    ) -> Result<Vec<Value>> {
        let args = UrlArgs::new()
            .queue(queue.id())
            .extra(date.format("%Y%m%d"))
            .extra(hour);
        self.call("getmatchidsbyqueue", &args).await
    }

    /// getmatchplayerdetails/{match}, for a live match
    pub async fn get_active_match_details(&self, match_id: u64) -> Result<Vec<Value>> {
        self.call("getmatchplayerdetails", &UrlArgs::new().match_id(match_id)).await
    }
}

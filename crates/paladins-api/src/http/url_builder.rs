/*
[INPUT]:  Method name, session token, signature, timestamp, optional positional arguments
[OUTPUT]: Fully composed request URL
[POS]:    HTTP layer - positional-segment URL composition
[UPDATE]: When the remote service changes its path layout or argument order
*/

use std::borrow::Cow;

/// Optional method arguments.
///
/// Appended after the timestamp in the fixed order platform, player,
/// champion, language, match, queue, tier, season. Zero ids and empty
/// strings are treated as absent. `extra` segments follow, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlArgs {
    pub platform: Option<u32>,
    pub player: Option<String>,
    pub champion: Option<u32>,
    pub language: Option<u32>,
    pub match_id: Option<String>,
    pub queue: Option<u32>,
    pub tier: Option<u32>,
    pub season: Option<u32>,
    pub extra: Vec<String>,
}

impl UrlArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platform(mut self, platform: u32) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Player id or player name
    pub fn player(mut self, player: impl ToString) -> Self {
        self.player = Some(player.to_string());
        self
    }

    pub fn champion(mut self, champion: u32) -> Self {
        self.champion = Some(champion);
        self
    }

    pub fn language(mut self, language: u32) -> Self {
        self.language = Some(language);
        self
    }

    pub fn match_id(mut self, match_id: u64) -> Self {
        self.match_id = Some(match_id.to_string());
        self
    }

    /// Comma-separated list, used by the batch endpoints
    pub fn match_ids(mut self, match_ids: &[u64]) -> Self {
        self.match_id = Some(join_ids(match_ids));
        self
    }

    pub fn queue(mut self, queue: u32) -> Self {
        self.queue = Some(queue);
        self
    }

    pub fn tier(mut self, tier: u32) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    /// Append a segment after all positional arguments; only empty values are dropped
    pub fn extra(mut self, segment: impl ToString) -> Self {
        self.extra.push(segment.to_string());
        self
    }

    /// Present arguments as raw (unencoded) segments, in wire order
    pub fn segments(&self) -> Vec<String> {
        let numeric = |value: Option<u32>| value.filter(|v| *v != 0).map(|v| v.to_string());
        // "0" is treated as absent, so a player literally named "0" cannot be sent.
        let text = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty() && *v != "0")
                .map(str::to_string)
        };

        [
            numeric(self.platform),
            text(&self.player),
            numeric(self.champion),
            numeric(self.language),
            text(&self.match_id),
            numeric(self.queue),
            numeric(self.tier),
            numeric(self.season),
        ]
        .into_iter()
        .flatten()
        .chain(self.extra.iter().filter(|s| !s.is_empty()).cloned())
        .collect()
    }
}

/// Comma-joined id list for the batch endpoints. Zero ids are dropped.
pub fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .filter(|id| **id != 0)
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Ephemeral, fully signed request description
#[derive(Debug, Clone)]
pub struct SignedRequest<'a> {
    pub method: &'a str,
    pub dev_id: &'a str,
    pub signature: &'a str,
    /// Absent only for `createsession`
    pub session: Option<&'a str>,
    pub timestamp: &'a str,
    pub args: &'a UrlArgs,
}

impl SignedRequest<'_> {
    /// `{base}/{method}Json/{devId}/{signature}/{session}/{timestamp}[/{args...}]`
    pub fn to_url(&self, base_url: &str) -> String {
        let mut url = format!(
            "{}/{}Json/{}/{}",
            base_url.trim_end_matches('/'),
            self.method,
            path_segment(self.dev_id),
            self.signature
        );

        if let Some(session) = self.session {
            url.push('/');
            url.push_str(&path_segment(session));
        }

        url.push('/');
        url.push_str(self.timestamp);

        for segment in self.args.segments() {
            url.push('/');
            url.push_str(&path_segment(&segment));
        }

        url
    }
}

/// Percent-encode a segment unless it is already path-safe.
///
/// Commas are kept so that id lists stay readable to the service.
pub fn path_segment(raw: &str) -> Cow<'_, str> {
    let safe = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | ','));
    if safe {
        Cow::Borrowed(raw)
    } else {
        urlencoding::encode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(method: &str, args: &UrlArgs) -> String {
        SignedRequest {
            method,
            dev_id: "1004",
            signature: "abc123",
            session: Some("SESSION"),
            timestamp: "20240102030405",
            args,
        }
        .to_url("http://api.paladins.com/paladinsapi.svc")
    }

    const PREFIX: &str = "http://api.paladins.com/paladinsapi.svc";

    #[test]
    fn test_url_without_args() {
        let url = build("getdataused", &UrlArgs::new());
        assert_eq!(
            url,
            format!("{PREFIX}/getdatausedJson/1004/abc123/SESSION/20240102030405")
        );
    }

    #[test]
    fn test_url_all_args_in_fixed_order() {
        let args = UrlArgs::new()
            .season(8)
            .tier(7)
            .queue(6)
            .match_id(5)
            .language(4)
            .champion(3)
            .player(2)
            .platform(1);
        let url = build("m", &args);
        assert!(url.ends_with("/20240102030405/1/2/3/4/5/6/7/8"), "{url}");
    }

    #[rstest]
    #[case(UrlArgs::new().player(0).language(1), "/1")]
    #[case(UrlArgs::new().platform(0).player("Bob").champion(0), "/Bob")]
    #[case(UrlArgs::new().language(1).champion(2001), "/2001/1")]
    #[case(UrlArgs::new().match_id(0).queue(424), "/424")]
    #[case(UrlArgs::new().player("Bob").platform(5), "/5/Bob")]
    #[case(UrlArgs::new().player("").tier(0).season(3), "/3")]
    #[case(UrlArgs::new().match_id(987654321).language(2), "/2/987654321")]
    fn test_url_omits_zero_and_empty_args(#[case] args: UrlArgs, #[case] suffix: &str) {
        let url = build("m", &args);
        let expected = format!("{PREFIX}/mJson/1004/abc123/SESSION/20240102030405{suffix}");
        assert_eq!(url, expected);
    }

    #[test]
    fn test_url_encodes_player_names() {
        let url = build("getplayer", &UrlArgs::new().player("Big Boss/🙂"));
        assert!(
            url.ends_with("/20240102030405/Big%20Boss%2F%F0%9F%99%82"),
            "{url}"
        );
    }

    #[test]
    fn test_url_keeps_comma_lists() {
        let url = build("getmatchdetailsbatch", &UrlArgs::new().match_ids(&[10, 0, 20]));
        assert!(url.ends_with("/20240102030405/10,20"), "{url}");
    }

    #[test]
    fn test_url_extra_segments_follow_positional_args() {
        let args = UrlArgs::new().extra("20240102").queue(424).extra("0").extra("");
        let url = build("getmatchidsbyqueue", &args);
        assert!(url.ends_with("/20240102030405/424/20240102/0"), "{url}");
    }

    #[test]
    fn test_join_ids_drops_zero() {
        assert_eq!(join_ids(&[1, 0, 22, 333]), "1,22,333");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn test_url_createsession_has_no_session_segment() {
        let args = UrlArgs::new();
        let url = SignedRequest {
            method: "createsession",
            dev_id: "1004",
            signature: "abc123",
            session: None,
            timestamp: "20240102030405",
            args: &args,
        }
        .to_url("http://localhost:1234/");
        assert_eq!(
            url,
            "http://localhost:1234/createsessionJson/1004/abc123/20240102030405"
        );
    }
}

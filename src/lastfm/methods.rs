use super::registry::lastfm_methods;

lastfm_methods! {
    /// Album metadata: name, artist, listeners, playcount, url.
    fn album_get_info = "album"."getInfo" {
        auth: None,
        required: [artist, album],
        optional: ["mbid" => Absent, "lang" => Absent, "autocorrect" => Value("1"), "username" => Username],
        select: ["lfm > album > name", "lfm > album > artist", "lfm > album > listeners", "lfm > album > playcount", "lfm > album > url"],
    }

    /// Most applied tags on an album, with counts.
    fn album_get_top_tags = "album"."getTopTags" {
        auth: None,
        required: [artist, album],
        optional: ["autocorrect" => Value("1")],
        select: ["toptags > tag > name", "toptags > tag > count"],
    }

    /// Album search by name: album name and artist per hit.
    fn album_search = "album"."search" {
        auth: None,
        required: [album],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["albummatches > album > name", "albummatches > album > artist"],
    }

    /// Tag an album; `tags` is a comma separated list.
    fn album_add_tags = "album"."addTags" {
        auth: Required,
        required: [artist, album, tags],
        optional: [],
        select: [],
    }

    fn album_remove_tag = "album"."removeTag" {
        auth: Required,
        required: [artist, album, tag],
        optional: [],
        select: [],
    }

    /// Artist metadata: name, url, listeners, playcount.
    fn artist_get_info = "artist"."getInfo" {
        auth: None,
        required: [artist],
        optional: ["mbid" => Absent, "lang" => Absent, "autocorrect" => Value("1"), "username" => Username],
        select: ["lfm > artist > name", "lfm > artist > url", "lfm > artist > stats > listeners", "lfm > artist > stats > playcount"],
    }

    /// Canonical spelling of a possibly misspelled artist name.
    fn artist_get_correction = "artist"."getCorrection" {
        auth: None,
        required: [artist],
        optional: [],
        select: ["correction > artist > name"],
    }

    /// Similar artists with match score.
    fn artist_get_similar = "artist"."getSimilar" {
        auth: None,
        required: [artist],
        optional: ["limit" => Absent, "autocorrect" => Value("1")],
        select: ["similarartists > artist > name", "similarartists > artist > match"],
    }

    fn artist_get_top_albums = "artist"."getTopAlbums" {
        auth: None,
        required: [artist],
        optional: ["limit" => Absent, "page" => Absent, "autocorrect" => Value("1")],
        select: ["topalbums > album > name", "topalbums > album > playcount"],
    }

    fn artist_get_top_tags = "artist"."getTopTags" {
        auth: None,
        required: [artist],
        optional: ["autocorrect" => Value("1")],
        select: ["toptags > tag > name", "toptags > tag > count"],
    }

    fn artist_get_top_tracks = "artist"."getTopTracks" {
        auth: None,
        required: [artist],
        optional: ["limit" => Absent, "page" => Absent, "autocorrect" => Value("1")],
        select: ["toptracks > track > name", "toptracks > track > playcount", "toptracks > track > listeners"],
    }

    /// Artist search by name: name and listener count per hit.
    fn artist_search = "artist"."search" {
        auth: None,
        required: [artist],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["artistmatches > artist > name", "artistmatches > artist > listeners"],
    }

    /// Tag an artist; `tags` is a comma separated list.
    fn artist_add_tags = "artist"."addTags" {
        auth: Required,
        required: [artist, tags],
        optional: [],
        select: [],
    }

    fn artist_remove_tag = "artist"."removeTag" {
        auth: Required,
        required: [artist, tag],
        optional: [],
        select: [],
    }

    /// Unauthorized request token, first step of the desktop auth flow.
    fn auth_get_token = "auth"."getToken" {
        auth: SessionBootstrap,
        required: [],
        optional: [],
        select: ["token"],
    }

    /// Exchange an authorized token for a session: username and session key.
    fn auth_get_session = "auth"."getSession" {
        auth: SessionBootstrap,
        required: [token],
        optional: [],
        select: ["session > name", "session > key"],
    }

    fn chart_get_top_artists = "chart"."getTopArtists" {
        auth: None,
        required: [],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["artists > artist > name", "artists > artist > playcount"],
    }

    fn chart_get_top_tags = "chart"."getTopTags" {
        auth: None,
        required: [],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["tags > tag > name", "tags > tag > reach"],
    }

    fn chart_get_top_tracks = "chart"."getTopTracks" {
        auth: None,
        required: [],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["tracks > track > name", "tracks > track > artist > name"],
    }

    /// Most popular artists in a country (ISO 3166-1 country name).
    fn geo_get_top_artists = "geo"."getTopArtists" {
        auth: None,
        required: [country],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["topartists > artist > name", "topartists > artist > listeners"],
    }

    fn geo_get_top_tracks = "geo"."getTopTracks" {
        auth: None,
        required: [country],
        optional: ["location" => Absent, "limit" => Absent, "page" => Absent],
        select: ["tracks > track > name", "tracks > track > artist > name"],
    }

    /// Artists in a user's library with playcounts.
    fn library_get_artists = "library"."getArtists" {
        auth: None,
        required: [],
        optional: ["user" => Username, "limit" => Absent, "page" => Absent],
        select: ["artists > artist > name", "artists > artist > playcount"],
    }

    fn tag_get_info = "tag"."getInfo" {
        auth: None,
        required: [tag],
        optional: ["lang" => Absent],
        select: ["lfm > tag > name", "lfm > tag > reach", "lfm > tag > total"],
    }

    fn tag_get_similar = "tag"."getSimilar" {
        auth: None,
        required: [tag],
        optional: [],
        select: ["similartags > tag > name"],
    }

    fn tag_get_top_albums = "tag"."getTopAlbums" {
        auth: None,
        required: [tag],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["albums > album > name", "albums > album > artist > name"],
    }

    fn tag_get_top_artists = "tag"."getTopArtists" {
        auth: None,
        required: [tag],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["topartists > artist > name"],
    }

    fn tag_get_top_tracks = "tag"."getTopTracks" {
        auth: None,
        required: [tag],
        optional: ["limit" => Absent, "page" => Absent],
        select: ["tracks > track > name", "tracks > track > artist > name"],
    }

    /// Site-wide top tags with use counts.
    fn tag_get_top_tags = "tag"."getTopTags" {
        auth: None,
        required: [],
        optional: [],
        select: ["toptags > tag > name", "toptags > tag > count"],
    }

    /// Track metadata: name, artist, listeners, playcount.
    fn track_get_info = "track"."getInfo" {
        auth: None,
        required: [artist, track],
        optional: ["mbid" => Absent, "autocorrect" => Value("1"), "username" => Username],
        select: ["lfm > track > name", "lfm > track > artist > name", "lfm > track > listeners", "lfm > track > playcount"],
    }

    fn track_get_correction = "track"."getCorrection" {
        auth: None,
        required: [artist, track],
        optional: [],
        select: ["correction > track > name", "correction > track > artist > name"],
    }

    fn track_get_similar = "track"."getSimilar" {
        auth: None,
        required: [artist, track],
        optional: ["limit" => Absent, "autocorrect" => Value("1")],
        select: ["similartracks > track > name", "similartracks > track > artist > name", "similartracks > track > match"],
    }

    fn track_get_top_tags = "track"."getTopTags" {
        auth: None,
        required: [artist, track],
        optional: ["autocorrect" => Value("1")],
        select: ["toptags > tag > name", "toptags > tag > count"],
    }

    /// Track search by title, optionally narrowed by artist.
    fn track_search = "track"."search" {
        auth: None,
        required: [track],
        optional: ["artist" => Absent, "limit" => Absent, "page" => Absent],
        select: ["trackmatches > track > name", "trackmatches > track > artist"],
    }

    fn track_add_tags = "track"."addTags" {
        auth: Required,
        required: [artist, track, tags],
        optional: [],
        select: [],
    }

    fn track_remove_tag = "track"."removeTag" {
        auth: Required,
        required: [artist, track, tag],
        optional: [],
        select: [],
    }

    /// Mark a track as loved by the session user.
    fn track_love = "track"."love" {
        auth: Required,
        required: [artist, track],
        optional: [],
        select: [],
    }

    fn track_unlove = "track"."unlove" {
        auth: Required,
        required: [artist, track],
        optional: [],
        select: [],
    }

    fn track_ban = "track"."ban" {
        auth: Required,
        required: [artist, track],
        optional: [],
        select: [],
    }

    fn track_unban = "track"."unban" {
        auth: Required,
        required: [artist, track],
        optional: [],
        select: [],
    }

    /// Report the track the session user is listening to right now.
    fn track_update_now_playing = "track"."updateNowPlaying" {
        auth: Required,
        required: [artist, track],
        optional: ["album" => Absent, "trackNumber" => Absent, "duration" => Absent, "albumArtist" => Absent, "mbid" => Absent],
        select: ["nowplaying > track", "nowplaying > artist"],
    }

    /// Add a listen; `timestamp` is UNIX seconds (UTC) of when playback started.
    fn track_scrobble = "track"."scrobble" {
        auth: Required,
        required: [artist, track, timestamp],
        optional: ["album" => Absent, "trackNumber" => Absent, "duration" => Absent, "albumArtist" => Absent, "mbid" => Absent, "chosenByUser" => Absent],
        select: ["scrobbles > scrobble > track", "scrobbles > scrobble > artist"],
    }

    /// Profile of a user; defaults to the configured username.
    fn user_get_info = "user"."getInfo" {
        auth: None,
        required: [],
        optional: ["user" => Username],
        select: ["lfm > user > name", "lfm > user > playcount", "lfm > user > url"],
    }

    fn user_get_friends = "user"."getFriends" {
        auth: None,
        required: [],
        optional: ["user" => Username, "recenttracks" => Absent, "limit" => Absent, "page" => Absent],
        select: ["friends > user > name"],
    }

    fn user_get_loved_tracks = "user"."getLovedTracks" {
        auth: None,
        required: [],
        optional: ["user" => Username, "limit" => Absent, "page" => Absent],
        select: ["lovedtracks > track > name", "lovedtracks > track > artist > name"],
    }

    /// Recent listens: track, artist, album.
    fn user_get_recent_tracks = "user"."getRecentTracks" {
        auth: None,
        required: [],
        optional: ["user" => Username, "limit" => Absent, "page" => Absent, "from" => Absent, "to" => Absent],
        select: ["recenttracks > track > name", "recenttracks > track > artist", "recenttracks > track > album"],
    }

    fn user_get_top_albums = "user"."getTopAlbums" {
        auth: None,
        required: [],
        optional: ["user" => Username, "period" => Value("overall"), "limit" => Absent, "page" => Absent],
        select: ["topalbums > album > name", "topalbums > album > artist > name", "topalbums > album > playcount"],
    }

    fn user_get_top_artists = "user"."getTopArtists" {
        auth: None,
        required: [],
        optional: ["user" => Username, "period" => Value("overall"), "limit" => Absent, "page" => Absent],
        select: ["topartists > artist > name", "topartists > artist > playcount"],
    }

    fn user_get_top_tags = "user"."getTopTags" {
        auth: None,
        required: [],
        optional: ["user" => Username, "limit" => Absent],
        select: ["toptags > tag > name", "toptags > tag > count"],
    }

    fn user_get_top_tracks = "user"."getTopTracks" {
        auth: None,
        required: [],
        optional: ["user" => Username, "period" => Value("overall"), "limit" => Absent, "page" => Absent],
        select: ["toptracks > track > name", "toptracks > track > artist > name", "toptracks > track > playcount"],
    }
}

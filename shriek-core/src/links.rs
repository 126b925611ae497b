//! Outbound link and image URL resolution.
//!
//! Every displayed provider tile tries to take the viewer as close to the
//! title as possible: a direct YouTube watch page when the movie's video
//! list allows it, otherwise the provider's search page pre-filled with the
//! title, otherwise the provider homepage. Tiles with no resolvable link
//! render as non-interactive rather than being dropped.

use crate::types::{MovieRecord, Video};

/// Image CDN base for posters and provider logos.
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Provider search pages with a `{query}` placeholder for the movie title.
///
/// Apple TV has no usable search URL; its entry is the bare landing page
/// and the placeholder substitution is a no-op.
const SEARCH_TEMPLATES: &[(&str, &str)] = &[
    (
        "Google Play",
        "https://play.google.com/store/search?q={query}&c=movies",
    ),
    ("Apple TV", "https://tv.apple.com"),
    (
        "YouTube",
        "https://www.youtube.com/results?search_query={query}+movie",
    ),
    (
        "Vudu",
        "https://www.vudu.com/content/search/results?search={query}",
    ),
    (
        "Microsoft Store",
        "https://www.microsoft.com/search?q={query}&form=MSNVS",
    ),
    ("FandangoNOW", "https://www.fandangonow.com/search/{query}"),
    ("Rakuten TV", "https://rakuten.tv/search?search={query}"),
    (
        "Prime Video",
        "https://www.amazon.com/s?k={query}&i=instant-video",
    ),
    ("Disney Plus", "https://www.disneyplus.com/search?q={query}"),
    (
        "Paramount+",
        "https://www.paramountplus.com/search?q={query}",
    ),
    ("Netflix", "https://www.netflix.com/search?q={query}"),
    ("Hulu", "https://www.hulu.com/search?q={query}"),
    ("Shudder", "https://www.shudder.com/search?search={query}"),
    ("Sky Store", "https://www.skystore.com/search?q={query}"),
];

/// Provider landing pages used when no search template applies.
const HOMEPAGES: &[(&str, &str)] = &[
    ("Netflix", "https://www.netflix.com"),
    ("Prime Video", "https://www.primevideo.com"),
    ("Amazon Prime Video", "https://www.primevideo.com"),
    ("Shudder", "https://www.shudder.com"),
    ("Hulu", "https://www.hulu.com"),
    ("Disney Plus", "https://www.disneyplus.com"),
    ("Paramount+", "https://www.paramountplus.com"),
    ("Google Play", "https://play.google.com/store/movies"),
    ("Apple TV", "https://tv.apple.com"),
    ("YouTube", "https://www.youtube.com/movies"),
    ("Vudu", "https://www.vudu.com"),
    ("Microsoft Store", "https://www.microsoft.com/store/movies"),
    ("FandangoNOW", "https://www.fandangonow.com"),
    ("Rakuten TV", "https://rakuten.tv"),
    ("Sky Store", "https://www.skystore.com"),
];

/// Provider logo URL on the image CDN (small size).
pub fn logo_url(logo_path: &str) -> String {
    format!("{IMAGE_BASE}w92{logo_path}")
}

/// Poster or backdrop URL on the image CDN.
///
/// `size` is a CDN size segment such as "w200" or "w500".
pub fn poster_url(path: &str, size: &str) -> String {
    format!("{IMAGE_BASE}{size}{path}")
}

fn search_template(canonical_name: &str) -> Option<&'static str> {
    SEARCH_TEMPLATES
        .iter()
        .find(|(name, _)| *name == canonical_name)
        .map(|(_, template)| *template)
}

fn homepage(canonical_name: &str) -> Option<&'static str> {
    HOMEPAGES
        .iter()
        .find(|(name, _)| *name == canonical_name)
        .map(|(_, url)| *url)
}

/// Resolves the outbound link for a canonical provider, best link first.
///
/// Priority: YouTube watch deep link from the movie's video list, then a
/// search template filled with the URL-encoded title, then a registered
/// homepage. `None` means the tile renders without a link.
pub fn resolve_href(canonical_name: &str, movie: &MovieRecord) -> Option<String> {
    if canonical_name == "YouTube" {
        if let Some(url) = youtube_watch_url(&movie.videos) {
            return Some(url);
        }
    }

    if !movie.title.is_empty() {
        if let Some(template) = search_template(canonical_name) {
            return Some(template.replace("{query}", &urlencoding::encode(&movie.title)));
        }
    }

    homepage(canonical_name).map(str::to_string)
}

/// Picks a YouTube watch URL from a movie's video list.
///
/// Prefers a video whose type suggests the full feature or a trailer,
/// falling back to the first YouTube-hosted video with a key.
fn youtube_watch_url(videos: &[Video]) -> Option<String> {
    let candidates: Vec<&Video> = videos
        .iter()
        .filter(|v| v.site == "YouTube" && !v.key.is_empty())
        .collect();

    let picked = candidates
        .iter()
        .find(|v| {
            let video_type = v.video_type.to_lowercase();
            ["feature", "full", "movie", "trailer"]
                .iter()
                .any(|keyword| video_type.contains(keyword))
        })
        .or_else(|| candidates.first());

    picked.map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_videos(title: &str, videos: Vec<Video>) -> MovieRecord {
        MovieRecord {
            id: 1,
            title: title.to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            runtime: None,
            vote_average: None,
            genres: vec![],
            videos,
        }
    }

    fn video(site: &str, key: &str, video_type: &str) -> Video {
        Video {
            site: site.to_string(),
            key: key.to_string(),
            video_type: video_type.to_string(),
            name: String::new(),
        }
    }

    #[test]
    fn youtube_deep_links_to_trailer() {
        let movie = movie_with_videos(
            "The Thing",
            vec![video("YouTube", "abc123", "Trailer")],
        );
        assert_eq!(
            resolve_href("YouTube", &movie),
            Some("https://www.youtube.com/watch?v=abc123".to_string())
        );
    }

    #[test]
    fn youtube_prefers_feature_over_clip() {
        let movie = movie_with_videos(
            "The Thing",
            vec![
                video("YouTube", "clip1", "Clip"),
                video("YouTube", "feat1", "Full Feature"),
            ],
        );
        assert_eq!(
            resolve_href("YouTube", &movie),
            Some("https://www.youtube.com/watch?v=feat1".to_string())
        );
    }

    #[test]
    fn youtube_falls_back_to_first_video_then_search() {
        // Only a clip available: still deep-link to it.
        let movie = movie_with_videos("The Thing", vec![video("YouTube", "clip1", "Clip")]);
        assert_eq!(
            resolve_href("YouTube", &movie),
            Some("https://www.youtube.com/watch?v=clip1".to_string())
        );

        // Videos hosted elsewhere or keyless are ignored; search template wins.
        let movie = movie_with_videos(
            "The Thing",
            vec![video("Vimeo", "v1", "Trailer"), video("YouTube", "", "Trailer")],
        );
        assert_eq!(
            resolve_href("YouTube", &movie),
            Some("https://www.youtube.com/results?search_query=The%20Thing+movie".to_string())
        );
    }

    #[test]
    fn search_template_encodes_title() {
        let movie = movie_with_videos("It Follows", vec![]);
        assert_eq!(
            resolve_href("Netflix", &movie),
            Some("https://www.netflix.com/search?q=It%20Follows".to_string())
        );
    }

    #[test]
    fn empty_title_falls_back_to_homepage() {
        let movie = movie_with_videos("", vec![]);
        assert_eq!(
            resolve_href("Netflix", &movie),
            Some("https://www.netflix.com".to_string())
        );
    }

    #[test]
    fn unregistered_provider_resolves_to_none() {
        // No template and no homepage for this name: no link, even though
        // other providers have homepages registered.
        let movie = movie_with_videos("It Follows", vec![]);
        assert_eq!(resolve_href("Mubi", &movie), None);
    }

    #[test]
    fn apple_tv_template_has_no_placeholder() {
        let movie = movie_with_videos("It Follows", vec![]);
        assert_eq!(
            resolve_href("Apple TV", &movie),
            Some("https://tv.apple.com".to_string())
        );
    }
}

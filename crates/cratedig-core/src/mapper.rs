//! Release-to-draft mapping and draft-to-request building.
//!
//! Both operations are pure and deterministic. The mapper fills a draft from
//! whatever the release carries, degrading every missing field to an
//! empty/absent value instead of failing; the builder turns the (possibly
//! user-edited) draft into the outbound mutation variables without consulting
//! the release again, so user overrides are never reverted.

use crate::product::{
    CreateMediaInput, MetafieldInput, ProductCreateRequest, ProductDraft, ProductInput,
    ProductStatus, SeoInput,
};
use crate::release::Release;
use crate::split_csv;

impl ProductDraft {
    /// Build the initial draft from a fetched release.
    ///
    /// `source_url` is the URL the user pasted, kept verbatim for the
    /// `discogs_url` metafield. Only the first release image is pre-selected;
    /// the user may extend or shrink the selection afterwards.
    #[must_use]
    pub fn from_release(release: &Release, source_url: &str) -> Self {
        let title = format!(
            "{} - {}",
            release.artists_sort.as_deref().unwrap_or(""),
            release.title.as_deref().unwrap_or("")
        );

        let mut description = release
            .formats
            .iter()
            .map(|f| match f.text.as_deref() {
                Some(text) if !text.trim().is_empty() => format!("{} {}", f.name, text),
                _ => f.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(date) = release
            .released_formatted
            .as_deref()
            .filter(|d| !d.trim().is_empty())
        {
            description.push_str("\nReleased ");
            description.push_str(date);
        }

        // Literal commas inside an entry would split it on re-parse.
        let tags = release
            .genres
            .iter()
            .chain(release.styles.iter())
            .map(|entry| entry.replace(',', "").trim().to_owned())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let music_genre = release.genres.first().cloned().unwrap_or_default();

        let image_uris: Vec<String> = release
            .images
            .first()
            .map(|image| image.uri.clone())
            .filter(|uri| !uri.is_empty())
            .into_iter()
            .collect();

        Self {
            title,
            description,
            tags,
            status: ProductStatus::Draft,
            image_uris,
            sleeve_condition: None,
            media_condition: None,
            music_genre,
            source_url: source_url.to_owned(),
        }
    }
}

impl ProductCreateRequest {
    /// Assemble the `productCreate` variables from the current draft state.
    ///
    /// Emits exactly four metafields in a fixed order (sleeve condition,
    /// media condition, source URL, genre) and one media entry per selected
    /// image URI in selection order.
    #[must_use]
    pub fn from_draft(draft: &ProductDraft) -> Self {
        let metafields = vec![
            MetafieldInput::single_line(
                "custom",
                "sleeve_condition",
                draft.sleeve_condition.map_or("", |c| c.code()),
            ),
            MetafieldInput::single_line(
                "custom",
                "media_condition",
                draft.media_condition.map_or("", |c| c.code()),
            ),
            MetafieldInput::single_line("custom", "discogs_url", draft.source_url.clone()),
            // "music-genre" lives in Shopify's reserved namespace.
            MetafieldInput::single_line("shopify", "music-genre", draft.music_genre.clone()),
        ];

        let media = draft
            .image_uris
            .iter()
            .map(|uri| CreateMediaInput {
                original_source: uri.clone(),
                alt: String::new(),
                media_content_type: "IMAGE".to_string(),
            })
            .collect();

        Self {
            input: ProductInput {
                title: draft.title.clone(),
                description_html: format!("<div>{}</div>", draft.description),
                tags: split_csv(&draft.tags),
                status: draft.status,
                metafields,
                seo: SeoInput {
                    title: draft.title.clone(),
                    description: draft.description.clone(),
                },
            },
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Condition;
    use crate::release::{Format, Image};

    fn turiya_sings() -> Release {
        Release {
            title: Some("Turiya Sings".to_string()),
            artists_sort: Some("Coltrane, Alice".to_string()),
            genres: vec!["Jazz".to_string()],
            styles: vec!["Spiritual".to_string()],
            images: vec![
                Image {
                    uri: "a.jpg".to_string(),
                    ..Image::default()
                },
                Image {
                    uri: "b.jpg".to_string(),
                    ..Image::default()
                },
            ],
            ..Release::default()
        }
    }

    #[test]
    fn maps_title_tags_and_first_image() {
        let draft = ProductDraft::from_release(
            &turiya_sings(),
            "https://www.discogs.com/release/27681219-Alice-Coltrane-Turiya-Sings",
        );
        assert_eq!(draft.title, "Coltrane, Alice - Turiya Sings");
        assert_eq!(draft.tags, "Jazz, Spiritual");
        assert_eq!(draft.image_uris, vec!["a.jpg".to_string()]);
        assert_eq!(draft.music_genre, "Jazz");
        assert_eq!(draft.status, ProductStatus::Draft);
    }

    #[test]
    fn missing_artist_sort_yields_empty_segment_not_error() {
        let release = Release {
            title: Some("Untitled".to_string()),
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert_eq!(draft.title, " - Untitled");
    }

    #[test]
    fn empty_release_maps_to_empty_draft() {
        let draft = ProductDraft::from_release(&Release::default(), "u");
        assert_eq!(draft.title, " - ");
        assert_eq!(draft.description, "");
        assert_eq!(draft.tags, "");
        assert_eq!(draft.music_genre, "");
        assert!(draft.image_uris.is_empty());
    }

    #[test]
    fn description_joins_formats_and_appends_release_date() {
        let release = Release {
            formats: vec![
                Format {
                    name: "LP".to_string(),
                    text: Some("Gatefold".to_string()),
                    ..Format::default()
                },
                Format {
                    name: "CD".to_string(),
                    ..Format::default()
                },
            ],
            released_formatted: Some("Jul 16, 2021".to_string()),
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert_eq!(draft.description, "LP Gatefold CD\nReleased Jul 16, 2021");
    }

    #[test]
    fn description_omits_date_line_when_absent() {
        let release = Release {
            formats: vec![Format {
                name: "LP".to_string(),
                ..Format::default()
            }],
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert_eq!(draft.description, "LP");
    }

    #[test]
    fn tags_strip_commas_and_leave_no_separator_artifacts() {
        let release = Release {
            genres: vec!["Folk, World, & Country".to_string()],
            styles: vec![String::new(), "Dub".to_string()],
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert_eq!(draft.tags, "Folk World & Country, Dub");
    }

    #[test]
    fn tags_with_styles_only_have_no_leading_separator() {
        let release = Release {
            styles: vec!["Dub".to_string()],
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert_eq!(draft.tags, "Dub");
    }

    #[test]
    fn first_image_with_empty_uri_is_not_selected() {
        let release = Release {
            images: vec![Image::default()],
            ..Release::default()
        };
        let draft = ProductDraft::from_release(&release, "u");
        assert!(draft.image_uris.is_empty());
    }

    fn sample_draft() -> ProductDraft {
        ProductDraft {
            title: "Coltrane, Alice - Turiya Sings".to_string(),
            description: "LP\nReleased Jul 16, 2021".to_string(),
            tags: "Jazz, Spiritual".to_string(),
            status: ProductStatus::Active,
            image_uris: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            sleeve_condition: Some(Condition::NearMint),
            media_condition: Some(Condition::VeryGood),
            music_genre: "Jazz".to_string(),
            source_url: "https://www.discogs.com/release/27681219".to_string(),
        }
    }

    #[test]
    fn builder_wraps_description_and_uppercases_status() {
        let request = ProductCreateRequest::from_draft(&sample_draft());
        assert_eq!(
            request.input.description_html,
            "<div>LP\nReleased Jul 16, 2021</div>"
        );
        assert_eq!(request.input.status.as_str(), "ACTIVE");
    }

    #[test]
    fn builder_emits_fixed_metafield_set_in_order() {
        let request = ProductCreateRequest::from_draft(&sample_draft());
        let keys: Vec<(&str, &str)> = request
            .input
            .metafields
            .iter()
            .map(|m| (m.namespace.as_str(), m.key.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("custom", "sleeve_condition"),
                ("custom", "media_condition"),
                ("custom", "discogs_url"),
                ("shopify", "music-genre"),
            ]
        );
        assert_eq!(request.input.metafields[0].value, "NM");
        assert_eq!(request.input.metafields[1].value, "VG");
        assert_eq!(
            request.input.metafields[2].value,
            "https://www.discogs.com/release/27681219"
        );
        assert_eq!(request.input.metafields[3].value, "Jazz");
        assert!(request
            .input
            .metafields
            .iter()
            .all(|m| m.value_type == "single_line_text_field"));
    }

    #[test]
    fn builder_unset_conditions_become_empty_values() {
        let mut draft = sample_draft();
        draft.sleeve_condition = None;
        draft.media_condition = None;
        let request = ProductCreateRequest::from_draft(&draft);
        assert_eq!(request.input.metafields[0].value, "");
        assert_eq!(request.input.metafields[1].value, "");
    }

    #[test]
    fn builder_media_follows_selection_order() {
        let request = ProductCreateRequest::from_draft(&sample_draft());
        let sources: Vec<&str> = request
            .media
            .iter()
            .map(|m| m.original_source.as_str())
            .collect();
        assert_eq!(sources, vec!["a.jpg", "b.jpg"]);
        assert!(request
            .media
            .iter()
            .all(|m| m.alt.is_empty() && m.media_content_type == "IMAGE"));
    }

    #[test]
    fn builder_emits_no_media_for_empty_selection() {
        let mut draft = sample_draft();
        draft.image_uris.clear();
        let request = ProductCreateRequest::from_draft(&draft);
        assert!(request.media.is_empty());
    }

    #[test]
    fn builder_round_trips_visible_fields() {
        let draft = sample_draft();
        let request = ProductCreateRequest::from_draft(&draft);
        assert_eq!(request.input.title, draft.title);
        assert_eq!(request.input.tags.join(", "), draft.tags);
        assert_eq!(request.input.status, draft.status);
    }

    #[test]
    fn builder_seo_echoes_draft() {
        let draft = sample_draft();
        let request = ProductCreateRequest::from_draft(&draft);
        assert_eq!(request.input.seo.title, draft.title);
        assert_eq!(request.input.seo.description, draft.description);
    }

    #[test]
    fn empty_genres_and_styles_build_empty_tag_list() {
        let draft = ProductDraft::from_release(&Release::default(), "u");
        let request = ProductCreateRequest::from_draft(&draft);
        assert!(request.input.tags.is_empty());
    }
}

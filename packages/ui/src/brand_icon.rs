use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{
    FaDiscord, FaFacebook, FaGithub, FaGoogle, FaInstagram, FaLinkedin, FaReddit, FaTwitter,
};
use store::icons::{self, IconKey};

use crate::icons::FaLink;
use crate::Icon;

/// Font Awesome glyph for a social provider. `None` renders a generic link.
#[component]
pub fn BrandIcon(provider: Option<IconKey>, #[props(default = 18)] size: u32) -> Element {
    let title = provider.map(|k| k.display_name()).unwrap_or_else(|| "Other".to_string());
    let resource = icons::resolve(provider);
    rsx! {
        span {
            class: "brand-icon",
            title: "{title}",
            "data-icon": "{resource}",
            match provider {
                Some(IconKey::Github) => rsx! { Icon { width: size, height: size, icon: FaGithub } },
                Some(IconKey::Instagram) => rsx! { Icon { width: size, height: size, icon: FaInstagram } },
                Some(IconKey::X) => rsx! { Icon { width: size, height: size, icon: FaTwitter } },
                Some(IconKey::Facebook) => rsx! { Icon { width: size, height: size, icon: FaFacebook } },
                Some(IconKey::Linkedin) => rsx! { Icon { width: size, height: size, icon: FaLinkedin } },
                Some(IconKey::Gmail) => rsx! { Icon { width: size, height: size, icon: FaGoogle } },
                Some(IconKey::Discord) => rsx! { Icon { width: size, height: size, icon: FaDiscord } },
                Some(IconKey::Reddit) => rsx! { Icon { width: size, height: size, icon: FaReddit } },
                None => rsx! { Icon { width: size, height: size, icon: FaLink } },
            }
        }
    }
}

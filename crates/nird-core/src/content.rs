//! Static campaign content
//!
//! Everything the wizard displays is compiled in: profile bundles, the
//! resource list, and the copy of the hero, final and concept panels.
//! Nothing here has a lifecycle; all tables are read-only.

use std::fmt;

use crate::types::Profile;

// ─────────────────────────────────────────────────────────────────
// Profile bundles
// ─────────────────────────────────────────────────────────────────

/// Title and ordered items shown on the content step for one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBundle {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const STUDENT_BUNDLE: ContentBundle = ContentBundle {
    title: "Deviens un acteur du numérique responsable",
    items: &[
        "🎮 Comprendre les enjeux par le jeu",
        "🌱 Adopter des gestes éco-responsables",
        "🔒 Protéger tes données personnelles",
        "💡 Créer du contenu éthique",
    ],
};

pub const TEACHER_BUNDLE: ContentBundle = ContentBundle {
    title: "Ressources pédagogiques NIRD",
    items: &[
        "📚 Séquences clés en main",
        "🎯 Outils d'évaluation",
        "🤝 Partage de bonnes pratiques",
        "💻 Logiciels libres recommandés",
    ],
};

pub const SCHOOL_BUNDLE: ContentBundle = ContentBundle {
    title: "Démarche NIRD pour votre établissement",
    items: &[
        "📊 Audit de vos pratiques numériques",
        "🎯 Feuille de route personnalisée",
        "👥 Formation des équipes",
        "🏆 Label NIRD pour votre établissement",
    ],
};

/// Bundle for a profile
pub fn bundle_for(profile: Profile) -> &'static ContentBundle {
    match profile {
        Profile::Student => &STUDENT_BUNDLE,
        Profile::Teacher => &TEACHER_BUNDLE,
        Profile::School => &SCHOOL_BUNDLE,
    }
}

/// Call to action under the bundle list
pub const CONTENT_CTA: &str = "Voir les ressources";

// ─────────────────────────────────────────────────────────────────
// Profile picker
// ─────────────────────────────────────────────────────────────────

/// One selectable card on the profile step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCard {
    pub profile: Profile,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROFILE_CARDS: [ProfileCard; 3] = [
    ProfileCard {
        profile: Profile::Student,
        title: "Élève/Étudiant",
        description: "Je veux comprendre le numérique responsable",
    },
    ProfileCard {
        profile: Profile::Teacher,
        title: "Enseignant",
        description: "Je cherche des ressources pédagogiques",
    },
    ProfileCard {
        profile: Profile::School,
        title: "Établissement",
        description: "Nous voulons adopter la démarche NIRD",
    },
];

pub const PROFILE_TITLE: &str = "Qui êtes-vous ?";
pub const PROFILE_SUBTITLE: &str = "Nous adaptons le contenu à votre profil";

// ─────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────

/// 24-bit accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Kind of payload a resource would carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Playlist,
    Zip,
}

impl MediaType {
    pub fn label(self) -> &'static str {
        match self {
            MediaType::Pdf => "PDF",
            MediaType::Playlist => "Playlist",
            MediaType::Zip => "ZIP",
        }
    }
}

/// A listed resource. Inert: there is no payload behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub title: &'static str,
    pub media_type: MediaType,
    pub size_label: &'static str,
    pub accent: Rgb,
}

pub const RESOURCES: [ResourceDescriptor; 3] = [
    ResourceDescriptor {
        title: "Guide de démarrage",
        media_type: MediaType::Pdf,
        size_label: "2.3 MB",
        accent: Rgb(0x66, 0x7e, 0xea),
    },
    ResourceDescriptor {
        title: "Vidéos explicatives",
        media_type: MediaType::Playlist,
        size_label: "12 vidéos",
        accent: Rgb(0xf0, 0x93, 0xfb),
    },
    ResourceDescriptor {
        title: "Kit pédagogique",
        media_type: MediaType::Zip,
        size_label: "45 MB",
        accent: Rgb(0x4f, 0xac, 0xfe),
    },
];

pub const RESOURCES_TITLE: &str = "Ressources disponibles";
pub const RESOURCES_SUBTITLE: &str = "Tout ce dont vous avez besoin pour démarrer";
pub const RESOURCES_CTA: &str = "Rejoindre la communauté";

// ─────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────

pub const HERO_BADGE: &str = "NIRD 2025";
pub const HERO_TITLE: &str = "Le Village Numérique Résistant";
pub const HERO_SUBTITLE: &str =
    "Comment les établissements scolaires peuvent tenir tête aux Big Tech ?";
pub const HERO_PILLARS: [&str; 3] = ["Durable", "Inclusif", "Responsable"];
pub const HERO_CTA: &str = "Découvrir la démarche";
pub const HERO_CONCEPT_CTA: &str = "💡 Comprendre le concept ergonomique";

// ─────────────────────────────────────────────────────────────────
// Final
// ─────────────────────────────────────────────────────────────────

/// One headline figure on the final step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FINAL_TITLE: &str = "Bienvenue dans le Village NIRD ! 🎉";
pub const FINAL_TEXT: &str = "Vous faites maintenant partie d'une communauté qui construit un \
numérique plus éthique, durable et inclusif.";
pub const FINAL_STATS: [Stat; 3] = [
    Stat {
        value: "1,200+",
        label: "Établissements",
    },
    Stat {
        value: "15,000+",
        label: "Enseignants",
    },
    Stat {
        value: "250K+",
        label: "Élèves",
    },
];
pub const FINAL_CREATE_ACCOUNT: &str = "Créer mon compte";
pub const FINAL_RESTART: &str = "Recommencer le parcours";
pub const CREATE_ACCOUNT_NOTICE: &str = "La création de compte n'est pas encore ouverte.";

// ─────────────────────────────────────────────────────────────────
// Concept overlay
// ─────────────────────────────────────────────────────────────────

/// One numbered design principle in the concept overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const OVERLAY_TITLE: &str = "💡 Concept Ergonomique";
pub const OVERLAY_HEADING: &str = "L'Interface Progressivement Révélée";
pub const OVERLAY_PROBLEM: &str =
    "Problème résolu : Surcharge cognitive des interfaces éducatives traditionnelles";

pub const PRINCIPLES: [Principle; 5] = [
    Principle {
        title: "Contextualité",
        detail: "L'interface s'adapte à qui vous êtes et ce que vous cherchez",
    },
    Principle {
        title: "Minimalisme radical",
        detail: "Une seule action principale visible à la fois",
    },
    Principle {
        title: "Navigation narrative",
        detail: "Flèches = parcours comme une histoire",
    },
    Principle {
        title: "Feedback immédiat",
        detail: "Chaque interaction a une réponse visuelle claire",
    },
    Principle {
        title: "Accessibilité native",
        detail: "Navigation au clavier, contraste optimisé, textes lisibles",
    },
];

pub const VISION_NOTE_TITLE: &str = "Note de vision ergonomique";
pub const VISION_NOTE: [&str; 2] = [
    "Notre priorité est de réduire la charge cognitive en dévoilant l'interface étape par \
étape, tout en gardant l'utilisateur en contrôle de son parcours. Le principal compromis \
assumé est d'ajouter quelques clics et transitions supplémentaires en échange d'une \
meilleure compréhension, d'un rythme plus calme et d'un sentiment de progression guidée.",
    "Cette démarche s'inspire des parcours d'onboarding des applications pédagogiques, des \
principes de design minimaliste et des recommandations d'ergonomie centrées sur \
l'accessibilité (contraste fort, hiérarchie visuelle claire, actions principales isolées).",
];
pub const OVERLAY_FOOTER: &str = "📍 Vous êtes à l'étape du parcours où nous montrons \
UNIQUEMENT ce qui est pertinent pour vous.";

// ─────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────

pub const LOGO_TEXT: &str = "NIRD";
pub const LOGO_BADGE: &str = "HAIR'GONOMIE";

//! Static snippet registry: category tag -> titled list of named code
//! snippets. Pure lookup; inserting a snippet into a buffer is the
//! caller's concern.

pub struct Snippet {
    pub name: &'static str,
    pub code: &'static str,
}

pub struct SnippetCategory {
    pub tag: &'static str,
    pub title: &'static str,
    pub snippets: &'static [Snippet],
}

const CATEGORIES: &[SnippetCategory] = &[
    SnippetCategory {
        tag: "card",
        title: "Cards",
        snippets: &[Snippet {
            name: "Card Simple",
            code: "<div class=\"card\">\n  <div class=\"card-header\">\n    <h3>Titre de la carte</h3>\n  </div>\n  <div class=\"card-body\">\n    <p>Contenu de la carte</p>\n    <button class=\"btn btn-primary\">Action</button>\n  </div>\n</div>",
        }],
    },
    SnippetCategory {
        tag: "button",
        title: "Boutons",
        snippets: &[Snippet {
            name: "Bouton Primary",
            code: "<button class=\"btn btn-primary\">\n  <span class=\"btn-text\">Cliquer ici</span>\n</button>",
        }],
    },
    SnippetCategory {
        tag: "navbar",
        title: "Navigation",
        snippets: &[Snippet {
            name: "Navbar Simple",
            code: "<nav class=\"navbar\">\n  <div class=\"navbar-brand\">\n    <a href=\"#\" class=\"brand-link\">Mon Site</a>\n  </div>\n  <ul class=\"navbar-nav\">\n    <li class=\"nav-item\"><a href=\"#\" class=\"nav-link\">Accueil</a></li>\n    <li class=\"nav-item\"><a href=\"#\" class=\"nav-link\">À propos</a></li>\n    <li class=\"nav-item\"><a href=\"#\" class=\"nav-link\">Contact</a></li>\n  </ul>\n</nav>",
        }],
    },
    SnippetCategory {
        tag: "footer",
        title: "Footers",
        snippets: &[Snippet {
            name: "Footer Simple",
            code: "<footer class=\"footer\">\n  <div class=\"footer-content\">\n    <p>&copy; 2024 Mon Site. Tous droits réservés.</p>\n  </div>\n</footer>",
        }],
    },
    SnippetCategory {
        tag: "form",
        title: "Formulaires",
        snippets: &[Snippet {
            name: "Formulaire Contact",
            code: "<form class=\"contact-form\">\n  <div class=\"form-group\">\n    <label for=\"name\">Nom complet</label>\n    <input type=\"text\" id=\"name\" name=\"name\" required>\n  </div>\n  <div class=\"form-group\">\n    <label for=\"email\">Email</label>\n    <input type=\"email\" id=\"email\" name=\"email\" required>\n  </div>\n  <div class=\"form-group\">\n    <label for=\"message\">Message</label>\n    <textarea id=\"message\" name=\"message\" rows=\"5\" required></textarea>\n  </div>\n  <button type=\"submit\" class=\"btn btn-primary\">Envoyer</button>\n</form>",
        }],
    },
    SnippetCategory {
        tag: "links",
        title: "Liens CSS",
        snippets: &[
            Snippet {
                name: "Bootstrap CSS",
                code: "<link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css\" rel=\"stylesheet\">",
            },
            Snippet {
                name: "Tailwind CSS",
                code: "<script src=\"https://cdn.tailwindcss.com\"></script>",
            },
            Snippet {
                name: "CSS Local",
                code: "<link rel=\"stylesheet\" href=\"style.css\">",
            },
            Snippet {
                name: "JavaScript Local",
                code: "<script src=\"script.js\"></script>",
            },
        ],
    },
];

pub fn categories() -> &'static [SnippetCategory] {
    CATEGORIES
}

pub fn category(tag: &str) -> Option<&'static SnippetCategory> {
    CATEGORIES.iter().find(|c| c.tag == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_tag() {
        let cards = category("card").unwrap();
        assert_eq!(cards.title, "Cards");
        assert_eq!(cards.snippets[0].name, "Card Simple");
        assert!(category("nope").is_none());
    }

    #[test]
    fn test_every_category_has_snippets() {
        for cat in categories() {
            assert!(!cat.snippets.is_empty(), "empty category: {}", cat.tag);
        }
    }
}

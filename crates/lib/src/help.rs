//! The marcel help listing.
//!
//! `docker help` would answer in the target vocabulary, so marcel prints its
//! own listing instead. The listing is returned as an `echo` argument vector
//! and replaces the translated command entirely.

use crate::command::CommandArgs;
use crate::consts::ECHO_PROGRAM;

#[derive(Debug, Clone, Copy)]
struct Entry {
  name: &'static str,
  description: &'static str,
}

const fn entry(name: &'static str, description: &'static str) -> Entry {
  Entry { name, description }
}

#[derive(Debug, Clone, Copy)]
struct Section {
  title: &'static str,
  indent: usize,
  width: usize,
  entries: &'static [Entry],
}

const USAGE: &str = "Utilisation:   marcel [OPTIONS] COMMAND ";
const TAGLINE: &str = "Le Docker à la française !";
const NEWLINE: &str = "\n";

const OPTIONS: &[Entry] = &[
  entry("--aide", "Vient au secours de l'utilisateur"),
  entry(
    "--auteur",
    "Permet de préciser le nom du propriétaire intellectuel de l'oeuvre",
  ),
  entry("--sortie", "--output"),
  entry(
    "--49-3",
    "Décision unilatérale permettant d'assurer l'exécution de la procédure",
  ),
  entry("--etat-d-urgence", "Desormais, je fais ce qu'il me plait"),
  entry("--disque-numerique-polyvalent", "--dvd"),
];

const GROUPS: &[Entry] = &[
  entry("récipient", "Placard"),
  entry("cédérom", "Médiathèque"),
  entry("réseau", "Point de rassemblement"),
  entry("monte-le-son", "Table de mixage"),
];

const COMMANDS: &[Entry] = &[
  entry("chauffe", "Démarre un nouveau récipient"),
  entry("fais", "Exécute une nouvelle directive dans un récipient existant"),
  entry("pousse", "Envoi un cédérom dans la médiathèque"),
  entry("apporte", "Récupère un cédérom de la médiathèque"),
  entry("bûches", "Invite les bûches d'un récipient"),
  entry(
    "grève",
    "Arrêt du travail pour cause de revendications mutiples. Sortez les barbecues !",
  ),
  entry("matuer", "Assassine sauvagement un récipient"),
  entry("perquisitionne", "Récupère les informations de chaque objet Marcel"),
  entry("construis", "Grave un nouveau cédérom"),
  entry("charge", "Copie un cédérom depuis un disque local"),
  entry("france24", "Retransmet les informations essentielles à propos de Marcel"),
  entry("rtt", "Donne une pause bien méritée au récipient"),
  entry("cederoms", "Affiche la liste des cédéroms de la médiathèque locale"),
  entry("vos-papiers", "Montre pâte blanche auprès de ces messieurs les gendarmes"),
  entry("sauvegarde", "Copie un cédérom sur un support amovible"),
  entry("graffiti", "Dessine un nom sur un cédérom"),
  entry("rsa", "Supprime un cédérom de la médiathèque locale"),
  entry("assigne-à-résidence", "Grave un cédérom à partir d'un récipient existant"),
  entry("roman-national", "Affiche toute l'histoire d'un cédérom"),
  entry("recycle", "Supprime un récipient"),
  entry(
    "cherche",
    "Envoi Lycos pour trouver un cédérom à la médiathèque du coin de la rue",
  ),
  entry("auboulot", "Remet au boulot un récipient en grève"),
  entry("barrage", "Empêche un récipient d'avancer jusqu'à ce qu'il capitule"),
  entry("socialistes", "Affiche la liste des récipients actifs"),
  entry("aide", "Vient au secours de l'utilisateur"),
];

const SECTIONS: &[Section] = &[
  Section {
    title: "Options :",
    indent: 6,
    width: 32,
    entries: OPTIONS,
  },
  Section {
    title: "Groupes de directives :",
    indent: 2,
    width: 22,
    entries: GROUPS,
  },
  Section {
    title: "Directives :",
    indent: 2,
    width: 22,
    entries: COMMANDS,
  },
];

/// Build the help listing as an `echo` invocation.
///
/// Each line is emitted as separate fragments followed by an explicit
/// newline token, so the output is readable once `echo` joins them.
pub fn help_command() -> CommandArgs {
  let mut args = vec![ECHO_PROGRAM.to_string()];
  let mut line = |fragments: &[&str]| {
    args.extend(fragments.iter().map(|f| f.to_string()));
    args.push(NEWLINE.to_string());
  };

  line(&[USAGE]);
  line(&[]);
  line(&[TAGLINE]);
  line(&[]);

  for (i, section) in SECTIONS.iter().enumerate() {
    if i > 0 {
      line(&[]);
    }
    line(&[section.title]);
    for entry in section.entries {
      let name = format!(
        "{:indent$}{:<width$}",
        "",
        entry.name,
        indent = section.indent,
        width = section.width
      );
      line(&[name.as_str(), entry.description]);
    }
  }

  args.into_iter().collect()
}

/// Every word the listing advertises, in display order.
pub fn advertised_words() -> impl Iterator<Item = &'static str> {
  SECTIONS.iter().flat_map(|s| s.entries.iter().map(|e| e.name))
}

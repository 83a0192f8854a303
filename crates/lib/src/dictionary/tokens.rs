/// Subcommands and flags, source word first.
pub static TOKENS: &[(&str, &str)] = &[
  // Commands
  ("chauffe", "run"),
  ("fais", "exec"),
  ("pousse", "push"),
  ("apporte", "pull"),
  ("bûches", "logs"),
  ("grève", "suspend"),
  ("matuer", "kill"),
  ("perquisitionne", "inspect"),
  ("construis", "build"),
  ("charge", "load"),
  ("plagie", "copy"),
  ("france24", "info"),
  ("insee", "stats"),
  ("rtt", "pause"),
  ("sur-ecoute", "attach"),
  ("cederoms", "images"),
  ("vos-papiers", "login"),
  ("déchéance", "logout"),
  ("sauvegarde", "save"),
  ("graffiti", "tag"),
  ("rsa", "rmi"),
  ("assigne-à-résidence", "commit"),
  ("roman-national", "history"),
  ("recycle", "rm"),
  ("cherche", "search"),
  ("réseau", "network"),
  ("marseille", "port"),
  ("renomme", "rename"),
  ("auboulot", "unpause"),
  ("barrage", "wait"),
  ("socialistes", "ps"),
  ("aide", "help"),
  ("monte-le-son", "volume"),
  ("récipient", "container"),
  ("cédérom", "image"),
  // Options
  ("--aide", "--help"),
  ("--graffiti", "--tag"),
  ("--sortie", "--output"),
  ("--auteur", "--author"),
  ("--49-3", "--force"),
  ("--etat-d-urgence", "--privileged"),
  ("--disque-numerique-polyvalent", "--dvd"),
];

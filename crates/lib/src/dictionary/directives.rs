/// Manifest keywords, source keyword first.
pub static DIRECTIVES: &[(&str, &str)] = &[
  ("DEPUIS", "FROM"),
  ("CRÉATEUR", "MAINTAINER"),
  ("LANCE", "RUN"),
  ("ORDRE", "CMD"),
  ("ÉTIQUETTE", "LABEL"),
  ("DÉSIGNER", "EXPOSE"),
  ("EELV", "ENV"),
  ("AJOUTER", "ADD"),
  ("COPIER", "COPY"),
  ("POINT D'ENTRÉE", "ENTRYPOINT"),
  ("UTILISATEUR", "USER"),
  ("LIEU DE TRAVAIL", "WORKDIR"),
  ("BTP", "ONBUILD"),
  ("APÉRITIF", "STOPSIGNAL"),
];

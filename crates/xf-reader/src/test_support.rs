use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) const SIMPLE_FORM: &str = r#"<?xml version="1.0"?>
<h:html xmlns="http://www.w3.org/2002/xforms" xmlns:h="http://www.w3.org/1999/xhtml" xmlns:jr="http://openrosa.org/javarosa">
  <h:head>
    <h:title>Simple</h:title>
    <model>
      <instance>
        <data id="simple">
          <name/><age/><household><size/></household><color/><pets/><note/><total/>
          <meta><deviceid/><instanceID/></meta>
        </data>
      </instance>
      <bind nodeset="/data/name" type="string" required="true()"/>
      <bind nodeset="/data/age" type="int"/>
      <bind nodeset="/data/household/size" type="int"/>
      <bind nodeset="/data/color" type="select1"/>
      <bind nodeset="/data/pets" type="select"/>
      <bind nodeset="/data/note" type="string" readonly="true()"/>
      <bind nodeset="/data/total" calculate="/data/age * 2"/>
      <bind nodeset="/data/meta/deviceid" type="string" jr:preload="property" jr:preloadParams="deviceid"/>
      <bind nodeset="/data/meta/instanceID" type="string" readonly="true()" calculate="concat('uuid:', uuid())"/>
    </model>
  </h:head>
  <h:body>
    <input ref="/data/name"><label>Name</label></input>
    <input ref="/data/age"><label>Age</label></input>
    <group ref="/data/household">
      <label>Household</label>
      <input ref="/data/household/size"><label>Size</label></input>
    </group>
    <select1 ref="/data/color">
      <label>Color</label>
      <item><label>Red</label><value>red</value></item>
      <item><label>
        Light blue
      </label><value>light_blue</value></item>
      <item><label>Green</label><value>green</value></item>
    </select1>
    <select ref="/data/pets">
      <label>Pets</label>
      <item><label>Cat</label><value>cat</value></item>
      <item><label>Dog</label><value>dog</value></item>
      <item><label>Fish</label><value>fish</value></item>
    </select>
    <input ref="/data/note"><label>Read the instructions</label></input>
  </h:body>
</h:html>
"#;

pub(crate) const SIMPLE_RESULT: &str = r#"<?xml version="1.0"?>
<data id="simple">
  <name>Ada</name>
  <age>36</age>
  <household>
    <size>4</size>
  </household>
  <color>red</color>
  <pets>cat dog</pets>
  <note/>
  <meta>
    <deviceid>imei:1</deviceid>
    <instanceID>uuid:1</instanceID>
  </meta>
</data>
"#;

pub(crate) const TRANSLATED_FORM: &str = r#"<?xml version="1.0"?>
<h:html xmlns="http://www.w3.org/2002/xforms" xmlns:h="http://www.w3.org/1999/xhtml" xmlns:jr="http://openrosa.org/javarosa">
  <h:head>
    <h:title>Translated</h:title>
    <model>
      <itext>
        <translation lang="French">
          <text id="/data/name:label"><value>Nom</value></text>
          <text id="/data/colors:label"><value>Couleurs</value></text>
          <text id="/data/colors/red:label"><value>Rouge</value></text>
          <text id="/data/colors/blue:label"><value>Bleu</value></text>
        </translation>
        <translation lang="English" default="true()">
          <text id="/data/name:label"><value>Name</value></text>
          <text id="/data/colors:label"><value>Colors</value></text>
          <text id="/data/colors/red:label"><value>Red</value></text>
          <text id="/data/colors/blue:label"><value form="long">Blue</value></text>
          <text id="/data/colors/green:label"><value>Green</value></text>
        </translation>
      </itext>
      <instance>
        <data id="translated">
          <name/><colors/><household><size/></household><meta><deviceid/></meta>
        </data>
      </instance>
      <bind nodeset="/data/name" type="string"/>
      <bind nodeset="/data/colors" type="select"/>
      <bind nodeset="/data/household/size" type="int"/>
      <bind nodeset="/data/meta/deviceid" type="string" jr:preload="property" jr:preloadParams="deviceid"/>
    </model>
  </h:head>
  <h:body>
    <input ref="/data/name"><label ref="jr:itext('/data/name:label')"/></input>
    <select ref="/data/colors">
      <label ref="jr:itext('/data/colors:label')"/>
      <item><label ref="jr:itext('/data/colors/red:label')"/><value>red</value></item>
      <item><label ref="jr:itext('/data/colors/blue:label')"/><value>blue</value></item>
      <item><label ref="jr:itext('/data/colors/green:label')"/><value>green</value></item>
    </select>
    <group ref="/data/household">
      <input ref="/data/household/size"><label>Size</label></input>
    </group>
  </h:body>
</h:html>
"#;

pub(crate) const TRANSLATED_RESULT: &str = r#"<data id="translated">
  <name>Ada</name>
  <colors>red green</colors>
  <household><size>4</size></household>
  <meta><deviceid>imei:7</deviceid></meta>
</data>
"#;

pub(crate) fn temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should move forward")
        .as_nanos();
    std::env::temp_dir().join(format!("xf-reader-{}-{}", nanos, name))
}

pub(crate) fn write_file(path: &Path, content: &str) {
    let parent = path.parent().expect("path should have parent");
    fs::create_dir_all(parent).expect("parent dir should be created");
    fs::write(path, content).expect("file should be written");
}

//! Media type table backing [`ContentType`].
//!
//! Registered media types of the `application`, `audio`, `font`, `image`,
//! `message`, `model`, `multipart`, `text` and `video` top-level types, plus the
//! wildcard ranges OpenAPI accepts in `content` keys. Entries are lowercase and
//! sorted so lookups can binary search.

use crate::oas::enums::ContentType;

pub(crate) const MEDIA_TYPES: &[ContentType] = &[
    ContentType::new("*/*"),
    ContentType::new("application/*"),
    ContentType::new("application/*+json"),
    ContentType::new("application/1d-interleaved-parityfec"),
    ContentType::new("application/3gpdash-qoe-report+xml"),
    ContentType::new("application/3gpp-ims+xml"),
    ContentType::new("application/3gpphal+json"),
    ContentType::new("application/3gpphalforms+json"),
    ContentType::new("application/a2l"),
    ContentType::new("application/ace+cbor"),
    ContentType::new("application/ace+json"),
    ContentType::new("application/activemessage"),
    ContentType::new("application/activity+json"),
    ContentType::new("application/aif+cbor"),
    ContentType::new("application/aif+json"),
    ContentType::new("application/alto-cdni+json"),
    ContentType::new("application/alto-cdnifilter+json"),
    ContentType::new("application/alto-costmap+json"),
    ContentType::new("application/alto-costmapfilter+json"),
    ContentType::new("application/alto-directory+json"),
    ContentType::new("application/alto-endpointcost+json"),
    ContentType::new("application/alto-endpointcostparams+json"),
    ContentType::new("application/alto-endpointprop+json"),
    ContentType::new("application/alto-endpointpropparams+json"),
    ContentType::new("application/alto-error+json"),
    ContentType::new("application/alto-networkmap+json"),
    ContentType::new("application/alto-networkmapfilter+json"),
    ContentType::new("application/alto-propmap+json"),
    ContentType::new("application/alto-propmapparams+json"),
    ContentType::new("application/alto-updatestreamcontrol+json"),
    ContentType::new("application/alto-updatestreamparams+json"),
    ContentType::new("application/aml"),
    ContentType::new("application/andrew-inset"),
    ContentType::new("application/annodex"),
    ContentType::new("application/applefile"),
    ContentType::new("application/at+jwt"),
    ContentType::new("application/atf"),
    ContentType::new("application/atfx"),
    ContentType::new("application/atom+xml"),
    ContentType::new("application/atomcat+xml"),
    ContentType::new("application/atomdeleted+xml"),
    ContentType::new("application/atomicmail"),
    ContentType::new("application/atomserv+xml"),
    ContentType::new("application/atomsvc+xml"),
    ContentType::new("application/atsc-dwd+xml"),
    ContentType::new("application/atsc-dynamic-event-message"),
    ContentType::new("application/atsc-held+xml"),
    ContentType::new("application/atsc-rdt+json"),
    ContentType::new("application/atsc-rsat+xml"),
    ContentType::new("application/atxml"),
    ContentType::new("application/auth-policy+xml"),
    ContentType::new("application/automationml-aml+xml"),
    ContentType::new("application/automationml-amlx+zip"),
    ContentType::new("application/bacnet-xdd+zip"),
    ContentType::new("application/batch-smtp"),
    ContentType::new("application/bbolin"),
    ContentType::new("application/beep+xml"),
    ContentType::new("application/calendar+json"),
    ContentType::new("application/calendar+xml"),
    ContentType::new("application/call-completion"),
    ContentType::new("application/cals-1840"),
    ContentType::new("application/captive+json"),
    ContentType::new("application/cbor"),
    ContentType::new("application/cbor-seq"),
    ContentType::new("application/cccex"),
    ContentType::new("application/ccmp+xml"),
    ContentType::new("application/ccxml+xml"),
    ContentType::new("application/cda+xml"),
    ContentType::new("application/cdfx+xml"),
    ContentType::new("application/cdmi-capability"),
    ContentType::new("application/cdmi-container"),
    ContentType::new("application/cdmi-domain"),
    ContentType::new("application/cdmi-object"),
    ContentType::new("application/cdmi-queue"),
    ContentType::new("application/cdni"),
    ContentType::new("application/cea"),
    ContentType::new("application/cea-2018+xml"),
    ContentType::new("application/cellml+xml"),
    ContentType::new("application/cfw"),
    ContentType::new("application/city+json"),
    ContentType::new("application/clr"),
    ContentType::new("application/clue+xml"),
    ContentType::new("application/clue_info+xml"),
    ContentType::new("application/cms"),
    ContentType::new("application/cnrp+xml"),
    ContentType::new("application/coap-group+json"),
    ContentType::new("application/coap-payload"),
    ContentType::new("application/commonground"),
    ContentType::new("application/concise-problem-details+cbor"),
    ContentType::new("application/conference-info+xml"),
    ContentType::new("application/cose"),
    ContentType::new("application/cose-key"),
    ContentType::new("application/cose-key-set"),
    ContentType::new("application/cose-x509"),
    ContentType::new("application/cpl+xml"),
    ContentType::new("application/csrattrs"),
    ContentType::new("application/csta+xml"),
    ContentType::new("application/cstadata+xml"),
    ContentType::new("application/csvm+json"),
    ContentType::new("application/cu-seeme"),
    ContentType::new("application/cwl"),
    ContentType::new("application/cwl+json"),
    ContentType::new("application/cwt"),
    ContentType::new("application/cybercash"),
    ContentType::new("application/dash+xml"),
    ContentType::new("application/dash-patch+xml"),
    ContentType::new("application/dashdelta"),
    ContentType::new("application/davmount+xml"),
    ContentType::new("application/dca-rft"),
    ContentType::new("application/dcd"),
    ContentType::new("application/dec-dx"),
    ContentType::new("application/dialog-info+xml"),
    ContentType::new("application/dicom"),
    ContentType::new("application/dicom+json"),
    ContentType::new("application/dicom+xml"),
    ContentType::new("application/dii"),
    ContentType::new("application/dit"),
    ContentType::new("application/dns"),
    ContentType::new("application/dns+json"),
    ContentType::new("application/dns-message"),
    ContentType::new("application/dots+cbor"),
    ContentType::new("application/dskpp+xml"),
    ContentType::new("application/dsptype"),
    ContentType::new("application/dssc+der"),
    ContentType::new("application/dssc+xml"),
    ContentType::new("application/dvcs"),
    ContentType::new("application/edi-consent"),
    ContentType::new("application/edi-x12"),
    ContentType::new("application/edifact"),
    ContentType::new("application/efi"),
    ContentType::new("application/elm+json"),
    ContentType::new("application/elm+xml"),
    ContentType::new("application/emergencycalldata.cap+xml"),
    ContentType::new("application/emergencycalldata.comment+xml"),
    ContentType::new("application/emergencycalldata.control+xml"),
    ContentType::new("application/emergencycalldata.deviceinfo+xml"),
    ContentType::new("application/emergencycalldata.ecall.msd"),
    ContentType::new("application/emergencycalldata.legacyesn+json"),
    ContentType::new("application/emergencycalldata.providerinfo+xml"),
    ContentType::new("application/emergencycalldata.serviceinfo+xml"),
    ContentType::new("application/emergencycalldata.subscriberinfo+xml"),
    ContentType::new("application/emergencycalldata.veds+xml"),
    ContentType::new("application/emma+xml"),
    ContentType::new("application/emotionml+xml"),
    ContentType::new("application/encaprtp"),
    ContentType::new("application/epp+xml"),
    ContentType::new("application/epub+zip"),
    ContentType::new("application/eshop"),
    ContentType::new("application/example"),
    ContentType::new("application/exi"),
    ContentType::new("application/expect-ct-report+json"),
    ContentType::new("application/express"),
    ContentType::new("application/fastinfoset"),
    ContentType::new("application/fastsoap"),
    ContentType::new("application/fdf"),
    ContentType::new("application/fdt+xml"),
    ContentType::new("application/fhir+json"),
    ContentType::new("application/fhir+xml"),
    ContentType::new("application/fits"),
    ContentType::new("application/flexfec"),
    ContentType::new("application/font-tdpfr"),
    ContentType::new("application/framework-attributes+xml"),
    ContentType::new("application/futuresplash"),
    ContentType::new("application/geo+json"),
    ContentType::new("application/geo+json-seq"),
    ContentType::new("application/geopackage+sqlite3"),
    ContentType::new("application/geoxacml+xml"),
    ContentType::new("application/gltf-buffer"),
    ContentType::new("application/gml+xml"),
    ContentType::new("application/gzip"),
    ContentType::new("application/h224"),
    ContentType::new("application/held+xml"),
    ContentType::new("application/hl7v2+xml"),
    ContentType::new("application/hta"),
    ContentType::new("application/http"),
    ContentType::new("application/hyperstudio"),
    ContentType::new("application/ibe-key-request+xml"),
    ContentType::new("application/ibe-pkg-reply+xml"),
    ContentType::new("application/ibe-pp-data"),
    ContentType::new("application/iges"),
    ContentType::new("application/im-iscomposing+xml"),
    ContentType::new("application/index"),
    ContentType::new("application/index.cmd"),
    ContentType::new("application/index.obj"),
    ContentType::new("application/index.response"),
    ContentType::new("application/index.vnd"),
    ContentType::new("application/inkml+xml"),
    ContentType::new("application/iotp"),
    ContentType::new("application/ipfix"),
    ContentType::new("application/ipp"),
    ContentType::new("application/isup"),
    ContentType::new("application/its+xml"),
    ContentType::new("application/java-archive"),
    ContentType::new("application/java-serialized-object"),
    ContentType::new("application/java-vm"),
    ContentType::new("application/jf2feed+json"),
    ContentType::new("application/jose"),
    ContentType::new("application/jose+json"),
    ContentType::new("application/jrd+json"),
    ContentType::new("application/jscalendar+json"),
    ContentType::new("application/json"),
    ContentType::new("application/json-patch+json"),
    ContentType::new("application/json-seq"),
    ContentType::new("application/jwk+json"),
    ContentType::new("application/jwk-set+json"),
    ContentType::new("application/jwt"),
    ContentType::new("application/kpml-request+xml"),
    ContentType::new("application/kpml-response+xml"),
    ContentType::new("application/ld+json"),
    ContentType::new("application/lgr+xml"),
    ContentType::new("application/link-format"),
    ContentType::new("application/linkset"),
    ContentType::new("application/linkset+json"),
    ContentType::new("application/load-control+xml"),
    ContentType::new("application/logout+jwt"),
    ContentType::new("application/lost+xml"),
    ContentType::new("application/lostsync+xml"),
    ContentType::new("application/lpf+zip"),
    ContentType::new("application/lxf"),
    ContentType::new("application/m3g"),
    ContentType::new("application/mac-binhex40"),
    ContentType::new("application/mac-compactpro"),
    ContentType::new("application/macwriteii"),
    ContentType::new("application/mads+xml"),
    ContentType::new("application/manifest+json"),
    ContentType::new("application/marc"),
    ContentType::new("application/marcxml+xml"),
    ContentType::new("application/mathematica"),
    ContentType::new("application/mathml+xml"),
    ContentType::new("application/mathml-content+xml"),
    ContentType::new("application/mathml-presentation+xml"),
    ContentType::new("application/mbms-associated-procedure-description+xml"),
    ContentType::new("application/mbms-deregister+xml"),
    ContentType::new("application/mbms-envelope+xml"),
    ContentType::new("application/mbms-msk+xml"),
    ContentType::new("application/mbms-msk-response+xml"),
    ContentType::new("application/mbms-protection-description+xml"),
    ContentType::new("application/mbms-reception-report+xml"),
    ContentType::new("application/mbms-register+xml"),
    ContentType::new("application/mbms-register-response+xml"),
    ContentType::new("application/mbms-schedule+xml"),
    ContentType::new("application/mbms-user-service-description+xml"),
    ContentType::new("application/mbox"),
    ContentType::new("application/media-policy-dataset+xml"),
    ContentType::new("application/media_control+xml"),
    ContentType::new("application/mediaservercontrol+xml"),
    ContentType::new("application/merge-patch+json"),
    ContentType::new("application/metalink4+xml"),
    ContentType::new("application/mets+xml"),
    ContentType::new("application/mf4"),
    ContentType::new("application/mikey"),
    ContentType::new("application/mipc"),
    ContentType::new("application/missing-blocks+cbor-seq"),
    ContentType::new("application/mmt-aei+xml"),
    ContentType::new("application/mmt-usd+xml"),
    ContentType::new("application/mods+xml"),
    ContentType::new("application/moss-keys"),
    ContentType::new("application/moss-signature"),
    ContentType::new("application/mosskey-data"),
    ContentType::new("application/mosskey-request"),
    ContentType::new("application/mp21"),
    ContentType::new("application/mp4"),
    ContentType::new("application/mpeg4-generic"),
    ContentType::new("application/mpeg4-iod"),
    ContentType::new("application/mpeg4-iod-xmt"),
    ContentType::new("application/mrb-consumer+xml"),
    ContentType::new("application/mrb-publish+xml"),
    ContentType::new("application/msaccess"),
    ContentType::new("application/msc-ivr+xml"),
    ContentType::new("application/msc-mixer+xml"),
    ContentType::new("application/msword"),
    ContentType::new("application/mud+json"),
    ContentType::new("application/multipart-core"),
    ContentType::new("application/mxf"),
    ContentType::new("application/n-quads"),
    ContentType::new("application/n-triples"),
    ContentType::new("application/nasdata"),
    ContentType::new("application/news-checkgroups"),
    ContentType::new("application/news-groupinfo"),
    ContentType::new("application/news-transmission"),
    ContentType::new("application/nlsml+xml"),
    ContentType::new("application/node"),
    ContentType::new("application/nss"),
    ContentType::new("application/oauth-authz-req+jwt"),
    ContentType::new("application/oblivious-dns-message"),
    ContentType::new("application/ocsp-request"),
    ContentType::new("application/ocsp-response"),
    ContentType::new("application/octet-stream"),
    ContentType::new("application/oda"),
    ContentType::new("application/odm+xml"),
    ContentType::new("application/odx"),
    ContentType::new("application/oebps-package+xml"),
    ContentType::new("application/ogg"),
    ContentType::new("application/onenote"),
    ContentType::new("application/opc-nodeset+xml"),
    ContentType::new("application/oscore"),
    ContentType::new("application/oxps"),
    ContentType::new("application/p21"),
    ContentType::new("application/p21+zip"),
    ContentType::new("application/p2p-overlay+xml"),
    ContentType::new("application/parityfec"),
    ContentType::new("application/passport"),
    ContentType::new("application/patch-ops-error+xml"),
    ContentType::new("application/pdf"),
    ContentType::new("application/pdx"),
    ContentType::new("application/pem-certificate-chain"),
    ContentType::new("application/pgp-encrypted"),
    ContentType::new("application/pgp-keys"),
    ContentType::new("application/pgp-signature"),
    ContentType::new("application/pics-rules"),
    ContentType::new("application/pidf+xml"),
    ContentType::new("application/pidf-diff+xml"),
    ContentType::new("application/pkcs10"),
    ContentType::new("application/pkcs12"),
    ContentType::new("application/pkcs7-mime"),
    ContentType::new("application/pkcs7-signature"),
    ContentType::new("application/pkcs8"),
    ContentType::new("application/pkcs8-encrypted"),
    ContentType::new("application/pkix-attr-cert"),
    ContentType::new("application/pkix-cert"),
    ContentType::new("application/pkix-crl"),
    ContentType::new("application/pkix-pkipath"),
    ContentType::new("application/pkixcmp"),
    ContentType::new("application/pls+xml"),
    ContentType::new("application/poc-settings+xml"),
    ContentType::new("application/postscript"),
    ContentType::new("application/ppsp-tracker+json"),
    ContentType::new("application/problem+json"),
    ContentType::new("application/problem+xml"),
    ContentType::new("application/provenance+xml"),
    ContentType::new("application/prs.alvestrand.titrax-sheet"),
    ContentType::new("application/prs.cww"),
    ContentType::new("application/prs.cyn"),
    ContentType::new("application/prs.hpub+zip"),
    ContentType::new("application/prs.nprend"),
    ContentType::new("application/prs.plucker"),
    ContentType::new("application/prs.rdf-xml-crypt"),
    ContentType::new("application/prs.xsf+xml"),
    ContentType::new("application/pskc+xml"),
    ContentType::new("application/pvd+json"),
    ContentType::new("application/qsig"),
    ContentType::new("application/raptorfec"),
    ContentType::new("application/rdap+json"),
    ContentType::new("application/rdf+xml"),
    ContentType::new("application/reginfo+xml"),
    ContentType::new("application/relax-ng-compact-syntax"),
    ContentType::new("application/reputon+json"),
    ContentType::new("application/resource-lists+xml"),
    ContentType::new("application/resource-lists-diff+xml"),
    ContentType::new("application/rfc+xml"),
    ContentType::new("application/riscos"),
    ContentType::new("application/rlmi+xml"),
    ContentType::new("application/rls-services+xml"),
    ContentType::new("application/route-apd+xml"),
    ContentType::new("application/route-s-tsid+xml"),
    ContentType::new("application/route-usd+xml"),
    ContentType::new("application/rpki-checklist"),
    ContentType::new("application/rpki-ghostbusters"),
    ContentType::new("application/rpki-manifest"),
    ContentType::new("application/rpki-publication"),
    ContentType::new("application/rpki-roa"),
    ContentType::new("application/rpki-updown"),
    ContentType::new("application/rtf"),
    ContentType::new("application/rtploopback"),
    ContentType::new("application/rtx"),
    ContentType::new("application/samlassertion+xml"),
    ContentType::new("application/samlmetadata+xml"),
    ContentType::new("application/sarif+json"),
    ContentType::new("application/sarif-external-properties+json"),
    ContentType::new("application/sbe"),
    ContentType::new("application/sbml+xml"),
    ContentType::new("application/scaip+xml"),
    ContentType::new("application/scim+json"),
    ContentType::new("application/scvp-cv-request"),
    ContentType::new("application/scvp-cv-response"),
    ContentType::new("application/scvp-vp-request"),
    ContentType::new("application/scvp-vp-response"),
    ContentType::new("application/sdp"),
    ContentType::new("application/secevent+jwt"),
    ContentType::new("application/senml+cbor"),
    ContentType::new("application/senml+json"),
    ContentType::new("application/senml+xml"),
    ContentType::new("application/senml-etch+cbor"),
    ContentType::new("application/senml-etch+json"),
    ContentType::new("application/senml-exi"),
    ContentType::new("application/sensml+cbor"),
    ContentType::new("application/sensml+json"),
    ContentType::new("application/sensml+xml"),
    ContentType::new("application/sensml-exi"),
    ContentType::new("application/sep+xml"),
    ContentType::new("application/sep-exi"),
    ContentType::new("application/session-info"),
    ContentType::new("application/set-payment"),
    ContentType::new("application/set-payment-initiation"),
    ContentType::new("application/set-registration"),
    ContentType::new("application/set-registration-initiation"),
    ContentType::new("application/sgml"),
    ContentType::new("application/sgml-open-catalog"),
    ContentType::new("application/shf+xml"),
    ContentType::new("application/sieve"),
    ContentType::new("application/simple-filter+xml"),
    ContentType::new("application/simple-message-summary"),
    ContentType::new("application/simplesymbolcontainer"),
    ContentType::new("application/sipc"),
    ContentType::new("application/slate"),
    ContentType::new("application/smil+xml"),
    ContentType::new("application/smpte336m"),
    ContentType::new("application/soap+fastinfoset"),
    ContentType::new("application/soap+xml"),
    ContentType::new("application/sparql-query"),
    ContentType::new("application/sparql-results+xml"),
    ContentType::new("application/spdx+json"),
    ContentType::new("application/spirits-event+xml"),
    ContentType::new("application/sql"),
    ContentType::new("application/srgs"),
    ContentType::new("application/srgs+xml"),
    ContentType::new("application/sru+xml"),
    ContentType::new("application/ssml+xml"),
    ContentType::new("application/stix+json"),
    ContentType::new("application/swid+cbor"),
    ContentType::new("application/swid+xml"),
    ContentType::new("application/tamp-apex-update"),
    ContentType::new("application/tamp-apex-update-confirm"),
    ContentType::new("application/tamp-community-update"),
    ContentType::new("application/tamp-community-update-confirm"),
    ContentType::new("application/tamp-error"),
    ContentType::new("application/tamp-sequence-adjust"),
    ContentType::new("application/tamp-sequence-adjust-confirm"),
    ContentType::new("application/tamp-status-query"),
    ContentType::new("application/tamp-status-response"),
    ContentType::new("application/tamp-update"),
    ContentType::new("application/tamp-update-confirm"),
    ContentType::new("application/taxii+json"),
    ContentType::new("application/td+json"),
    ContentType::new("application/tei+xml"),
    ContentType::new("application/tetra_isi"),
    ContentType::new("application/thraud+xml"),
    ContentType::new("application/timestamp-query"),
    ContentType::new("application/timestamp-reply"),
    ContentType::new("application/timestamped-data"),
    ContentType::new("application/tlsrpt+gzip"),
    ContentType::new("application/tlsrpt+json"),
    ContentType::new("application/tm+json"),
    ContentType::new("application/tnauthlist"),
    ContentType::new("application/token-introspection+jwt"),
    ContentType::new("application/trickle-ice-sdpfrag"),
    ContentType::new("application/trig"),
    ContentType::new("application/ttml+xml"),
    ContentType::new("application/tve-trigger"),
    ContentType::new("application/tzif"),
    ContentType::new("application/tzif-leap"),
    ContentType::new("application/ulpfec"),
    ContentType::new("application/urc-grpsheet+xml"),
    ContentType::new("application/urc-ressheet+xml"),
    ContentType::new("application/urc-targetdesc+xml"),
    ContentType::new("application/urc-uisocketdesc+xml"),
    ContentType::new("application/vcard+json"),
    ContentType::new("application/vcard+xml"),
    ContentType::new("application/vemmi"),
    ContentType::new("application/vnd.1000minds.decision-model+xml"),
    ContentType::new("application/vnd.3gpp-prose+xml"),
    ContentType::new("application/vnd.3gpp-prose-pc3a+xml"),
    ContentType::new("application/vnd.3gpp-prose-pc3ach+xml"),
    ContentType::new("application/vnd.3gpp-prose-pc3ch+xml"),
    ContentType::new("application/vnd.3gpp-prose-pc8+xml"),
    ContentType::new("application/vnd.3gpp-v2x-local-service-information"),
    ContentType::new("application/vnd.3gpp.5gnas"),
    ContentType::new("application/vnd.3gpp.access-transfer-events+xml"),
    ContentType::new("application/vnd.3gpp.bsf+xml"),
    ContentType::new("application/vnd.3gpp.gmop+xml"),
    ContentType::new("application/vnd.3gpp.gtpc"),
    ContentType::new("application/vnd.3gpp.interworking-data"),
    ContentType::new("application/vnd.3gpp.lpp"),
    ContentType::new("application/vnd.3gpp.mc-signalling-ear"),
    ContentType::new("application/vnd.3gpp.mcdata-affiliation-command+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-info+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-msgstore-ctrl-request+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-payload"),
    ContentType::new("application/vnd.3gpp.mcdata-regroup+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-service-config+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-signalling"),
    ContentType::new("application/vnd.3gpp.mcdata-ue-config+xml"),
    ContentType::new("application/vnd.3gpp.mcdata-user-profile+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-affiliation-command+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-floor-request+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-info+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-location-info+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-mbms-usage-info+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-service-config+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-signed+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-ue-config+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-ue-init-config+xml"),
    ContentType::new("application/vnd.3gpp.mcptt-user-profile+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-affiliation-command+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-info+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-location-info+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-mbms-usage-info+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-service-config+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-transmission-request+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-ue-config+xml"),
    ContentType::new("application/vnd.3gpp.mcvideo-user-profile+xml"),
    ContentType::new("application/vnd.3gpp.mid-call+xml"),
    ContentType::new("application/vnd.3gpp.ngap"),
    ContentType::new("application/vnd.3gpp.pfcp"),
    ContentType::new("application/vnd.3gpp.pic-bw-large"),
    ContentType::new("application/vnd.3gpp.pic-bw-small"),
    ContentType::new("application/vnd.3gpp.pic-bw-var"),
    ContentType::new("application/vnd.3gpp.s1ap"),
    ContentType::new("application/vnd.3gpp.sms"),
    ContentType::new("application/vnd.3gpp.sms+xml"),
    ContentType::new("application/vnd.3gpp.srvcc-ext+xml"),
    ContentType::new("application/vnd.3gpp.srvcc-info+xml"),
    ContentType::new("application/vnd.3gpp.state-and-event-info+xml"),
    ContentType::new("application/vnd.3gpp.ussd+xml"),
    ContentType::new("application/vnd.3gpp2.bcmcsinfo+xml"),
    ContentType::new("application/vnd.3gpp2.sms"),
    ContentType::new("application/vnd.3gpp2.tcap"),
    ContentType::new("application/vnd.3lightssoftware.imagescal"),
    ContentType::new("application/vnd.3m.post-it-notes"),
    ContentType::new("application/vnd.accpac.simply.aso"),
    ContentType::new("application/vnd.accpac.simply.imp"),
    ContentType::new("application/vnd.acucobol"),
    ContentType::new("application/vnd.acucorp"),
    ContentType::new("application/vnd.adobe.flash.movie"),
    ContentType::new("application/vnd.adobe.formscentral.fcdt"),
    ContentType::new("application/vnd.adobe.fxp"),
    ContentType::new("application/vnd.adobe.partial-upload"),
    ContentType::new("application/vnd.adobe.xdp+xml"),
    ContentType::new("application/vnd.aether.imp"),
    ContentType::new("application/vnd.afpc.afplinedata"),
    ContentType::new("application/vnd.afpc.afplinedata-pagedef"),
    ContentType::new("application/vnd.afpc.cmoca-cmresource"),
    ContentType::new("application/vnd.afpc.foca-charset"),
    ContentType::new("application/vnd.afpc.foca-codedfont"),
    ContentType::new("application/vnd.afpc.foca-codepage"),
    ContentType::new("application/vnd.afpc.modca"),
    ContentType::new("application/vnd.afpc.modca-formdef"),
    ContentType::new("application/vnd.afpc.modca-mediummap"),
    ContentType::new("application/vnd.afpc.modca-objectcontainer"),
    ContentType::new("application/vnd.afpc.modca-overlay"),
    ContentType::new("application/vnd.afpc.modca-pagesegment"),
    ContentType::new("application/vnd.age"),
    ContentType::new("application/vnd.ah-barcode"),
    ContentType::new("application/vnd.ahead.space"),
    ContentType::new("application/vnd.airzip.filesecure.azf"),
    ContentType::new("application/vnd.airzip.filesecure.azs"),
    ContentType::new("application/vnd.amadeus+json"),
    ContentType::new("application/vnd.amazon.mobi8-ebook"),
    ContentType::new("application/vnd.americandynamics.acc"),
    ContentType::new("application/vnd.amiga.ami"),
    ContentType::new("application/vnd.amundsen.maze+xml"),
    ContentType::new("application/vnd.android.ota"),
    ContentType::new("application/vnd.android.package-archive"),
    ContentType::new("application/vnd.anki"),
    ContentType::new("application/vnd.anser-web-certificate-issue-initiation"),
    ContentType::new("application/vnd.anser-web-funds-transfer-initiation"),
    ContentType::new("application/vnd.antix.game-component"),
    ContentType::new("application/vnd.apache.arrow.file"),
    ContentType::new("application/vnd.apache.arrow.stream"),
    ContentType::new("application/vnd.apache.thrift.binary"),
    ContentType::new("application/vnd.apache.thrift.compact"),
    ContentType::new("application/vnd.apache.thrift.json"),
    ContentType::new("application/vnd.apexlang"),
    ContentType::new("application/vnd.api+json"),
    ContentType::new("application/vnd.aplextor.warrp+json"),
    ContentType::new("application/vnd.apothekende.reservation+json"),
    ContentType::new("application/vnd.apple.installer+xml"),
    ContentType::new("application/vnd.apple.keynote"),
    ContentType::new("application/vnd.apple.mpegurl"),
    ContentType::new("application/vnd.apple.numbers"),
    ContentType::new("application/vnd.apple.pages"),
    ContentType::new("application/vnd.aristanetworks.swi"),
    ContentType::new("application/vnd.artisan+json"),
    ContentType::new("application/vnd.artsquare"),
    ContentType::new("application/vnd.astraea-software.iota"),
    ContentType::new("application/vnd.audiograph"),
    ContentType::new("application/vnd.autopackage"),
    ContentType::new("application/vnd.avalon+json"),
    ContentType::new("application/vnd.avistar+xml"),
    ContentType::new("application/vnd.balsamiq.bmml+xml"),
    ContentType::new("application/vnd.balsamiq.bmpr"),
    ContentType::new("application/vnd.banana-accounting"),
    ContentType::new("application/vnd.bbf.usp.error"),
    ContentType::new("application/vnd.bbf.usp.msg"),
    ContentType::new("application/vnd.bbf.usp.msg+json"),
    ContentType::new("application/vnd.bekitzur-stech+json"),
    ContentType::new("application/vnd.belightsoft.lhzd+zip"),
    ContentType::new("application/vnd.belightsoft.lhzl+zip"),
    ContentType::new("application/vnd.bint.med-content"),
    ContentType::new("application/vnd.biopax.rdf+xml"),
    ContentType::new("application/vnd.blink-idb-value-wrapper"),
    ContentType::new("application/vnd.blueice.multipass"),
    ContentType::new("application/vnd.bluetooth.ep.oob"),
    ContentType::new("application/vnd.bluetooth.le.oob"),
    ContentType::new("application/vnd.bmi"),
    ContentType::new("application/vnd.bpf"),
    ContentType::new("application/vnd.bpf3"),
    ContentType::new("application/vnd.businessobjects"),
    ContentType::new("application/vnd.byu.uapi+json"),
    ContentType::new("application/vnd.cab-jscript"),
    ContentType::new("application/vnd.canon-cpdl"),
    ContentType::new("application/vnd.canon-lips"),
    ContentType::new("application/vnd.capasystems-pg+json"),
    ContentType::new("application/vnd.cendio.thinlinc.clientconf"),
    ContentType::new("application/vnd.century-systems.tcp_stream"),
    ContentType::new("application/vnd.chemdraw+xml"),
    ContentType::new("application/vnd.chess-pgn"),
    ContentType::new("application/vnd.chipnuts.karaoke-mmd"),
    ContentType::new("application/vnd.ciedi"),
    ContentType::new("application/vnd.cinderella"),
    ContentType::new("application/vnd.cirpack.isdn-ext"),
    ContentType::new("application/vnd.citationstyles.style+xml"),
    ContentType::new("application/vnd.claymore"),
    ContentType::new("application/vnd.cloanto.rp9"),
    ContentType::new("application/vnd.clonk.c4group"),
    ContentType::new("application/vnd.cluetrust.cartomobile-config"),
    ContentType::new("application/vnd.cluetrust.cartomobile-config-pkg"),
    ContentType::new("application/vnd.cncf.helm.chart.content.v1.tar+gzip"),
    ContentType::new("application/vnd.cncf.helm.chart.provenance.v1.prov"),
    ContentType::new("application/vnd.coffeescript"),
    ContentType::new("application/vnd.collabio.xodocuments.document"),
    ContentType::new("application/vnd.collabio.xodocuments.document-template"),
    ContentType::new("application/vnd.collabio.xodocuments.presentation"),
    ContentType::new("application/vnd.collabio.xodocuments.presentation-template"),
    ContentType::new("application/vnd.collabio.xodocuments.spreadsheet"),
    ContentType::new("application/vnd.collabio.xodocuments.spreadsheet-template"),
    ContentType::new("application/vnd.collection+json"),
    ContentType::new("application/vnd.collection.doc+json"),
    ContentType::new("application/vnd.collection.next+json"),
    ContentType::new("application/vnd.comicbook+zip"),
    ContentType::new("application/vnd.comicbook-rar"),
    ContentType::new("application/vnd.commerce-battelle"),
    ContentType::new("application/vnd.commonspace"),
    ContentType::new("application/vnd.contact.cmsg"),
    ContentType::new("application/vnd.coreos.ignition+json"),
    ContentType::new("application/vnd.cosmocaller"),
    ContentType::new("application/vnd.crick.clicker"),
    ContentType::new("application/vnd.crick.clicker.keyboard"),
    ContentType::new("application/vnd.crick.clicker.palette"),
    ContentType::new("application/vnd.crick.clicker.template"),
    ContentType::new("application/vnd.crick.clicker.wordbank"),
    ContentType::new("application/vnd.criticaltools.wbs+xml"),
    ContentType::new("application/vnd.cryptii.pipe+json"),
    ContentType::new("application/vnd.crypto-shade-file"),
    ContentType::new("application/vnd.cryptomator.encrypted"),
    ContentType::new("application/vnd.cryptomator.vault"),
    ContentType::new("application/vnd.ctc-posml"),
    ContentType::new("application/vnd.ctct.ws+xml"),
    ContentType::new("application/vnd.cups-pdf"),
    ContentType::new("application/vnd.cups-postscript"),
    ContentType::new("application/vnd.cups-ppd"),
    ContentType::new("application/vnd.cups-raster"),
    ContentType::new("application/vnd.cups-raw"),
    ContentType::new("application/vnd.curl"),
    ContentType::new("application/vnd.cyan.dean.root+xml"),
    ContentType::new("application/vnd.cybank"),
    ContentType::new("application/vnd.cyclonedx+json"),
    ContentType::new("application/vnd.cyclonedx+xml"),
    ContentType::new("application/vnd.d2l.coursepackage1p0+zip"),
    ContentType::new("application/vnd.d3m-dataset"),
    ContentType::new("application/vnd.d3m-problem"),
    ContentType::new("application/vnd.dart"),
    ContentType::new("application/vnd.data-vision.rdz"),
    ContentType::new("application/vnd.datalog"),
    ContentType::new("application/vnd.datapackage+json"),
    ContentType::new("application/vnd.dataresource+json"),
    ContentType::new("application/vnd.dbf"),
    ContentType::new("application/vnd.debian.binary-package"),
    ContentType::new("application/vnd.dece.data"),
    ContentType::new("application/vnd.dece.ttml+xml"),
    ContentType::new("application/vnd.dece.unspecified"),
    ContentType::new("application/vnd.dece.zip"),
    ContentType::new("application/vnd.denovo.fcselayout-link"),
    ContentType::new("application/vnd.desmume.movie"),
    ContentType::new("application/vnd.dir-bi.plate-dl-nosuffix"),
    ContentType::new("application/vnd.dm.delegation+xml"),
    ContentType::new("application/vnd.dna"),
    ContentType::new("application/vnd.document+json"),
    ContentType::new("application/vnd.dolby.mobile.1"),
    ContentType::new("application/vnd.dolby.mobile.2"),
    ContentType::new("application/vnd.doremir.scorecloud-binary-document"),
    ContentType::new("application/vnd.dpgraph"),
    ContentType::new("application/vnd.dreamfactory"),
    ContentType::new("application/vnd.drive+json"),
    ContentType::new("application/vnd.dtg.local"),
    ContentType::new("application/vnd.dtg.local.flash"),
    ContentType::new("application/vnd.dtg.local.html"),
    ContentType::new("application/vnd.dvb.ait"),
    ContentType::new("application/vnd.dvb.dvbisl+xml"),
    ContentType::new("application/vnd.dvb.dvbj"),
    ContentType::new("application/vnd.dvb.esgcontainer"),
    ContentType::new("application/vnd.dvb.ipdcdftnotifaccess"),
    ContentType::new("application/vnd.dvb.ipdcesgaccess"),
    ContentType::new("application/vnd.dvb.ipdcesgaccess2"),
    ContentType::new("application/vnd.dvb.ipdcesgpdd"),
    ContentType::new("application/vnd.dvb.ipdcroaming"),
    ContentType::new("application/vnd.dvb.iptv.alfec-base"),
    ContentType::new("application/vnd.dvb.iptv.alfec-enhancement"),
    ContentType::new("application/vnd.dvb.notif-aggregate-root+xml"),
    ContentType::new("application/vnd.dvb.notif-container+xml"),
    ContentType::new("application/vnd.dvb.notif-generic+xml"),
    ContentType::new("application/vnd.dvb.notif-ia-msglist+xml"),
    ContentType::new("application/vnd.dvb.notif-ia-registration-request+xml"),
    ContentType::new("application/vnd.dvb.notif-ia-registration-response+xml"),
    ContentType::new("application/vnd.dvb.notif-init+xml"),
    ContentType::new("application/vnd.dvb.pfr"),
    ContentType::new("application/vnd.dvb.service"),
    ContentType::new("application/vnd.dxr"),
    ContentType::new("application/vnd.dynageo"),
    ContentType::new("application/vnd.dzr"),
    ContentType::new("application/vnd.easykaraoke.cdgdownload"),
    ContentType::new("application/vnd.ecdis-update"),
    ContentType::new("application/vnd.ecip.rlp"),
    ContentType::new("application/vnd.eclipse.ditto+json"),
    ContentType::new("application/vnd.ecowin.chart"),
    ContentType::new("application/vnd.ecowin.filerequest"),
    ContentType::new("application/vnd.ecowin.fileupdate"),
    ContentType::new("application/vnd.ecowin.series"),
    ContentType::new("application/vnd.ecowin.seriesrequest"),
    ContentType::new("application/vnd.ecowin.seriesupdate"),
    ContentType::new("application/vnd.efi.img"),
    ContentType::new("application/vnd.efi.iso"),
    ContentType::new("application/vnd.eln+zip"),
    ContentType::new("application/vnd.emclient.accessrequest+xml"),
    ContentType::new("application/vnd.enliven"),
    ContentType::new("application/vnd.enphase.envoy"),
    ContentType::new("application/vnd.eprints.data+xml"),
    ContentType::new("application/vnd.epson.esf"),
    ContentType::new("application/vnd.epson.msf"),
    ContentType::new("application/vnd.epson.quickanime"),
    ContentType::new("application/vnd.epson.salt"),
    ContentType::new("application/vnd.epson.ssf"),
    ContentType::new("application/vnd.ericsson.quickcall"),
    ContentType::new("application/vnd.espass-espass+zip"),
    ContentType::new("application/vnd.eszigno3+xml"),
    ContentType::new("application/vnd.etsi.aoc+xml"),
    ContentType::new("application/vnd.etsi.asic-e+zip"),
    ContentType::new("application/vnd.etsi.asic-s+zip"),
    ContentType::new("application/vnd.etsi.cug+xml"),
    ContentType::new("application/vnd.etsi.iptvcommand+xml"),
    ContentType::new("application/vnd.etsi.iptvdiscovery+xml"),
    ContentType::new("application/vnd.etsi.iptvprofile+xml"),
    ContentType::new("application/vnd.etsi.iptvsad-bc+xml"),
    ContentType::new("application/vnd.etsi.iptvsad-cod+xml"),
    ContentType::new("application/vnd.etsi.iptvsad-npvr+xml"),
    ContentType::new("application/vnd.etsi.iptvservice+xml"),
    ContentType::new("application/vnd.etsi.iptvsync+xml"),
    ContentType::new("application/vnd.etsi.iptvueprofile+xml"),
    ContentType::new("application/vnd.etsi.mcid+xml"),
    ContentType::new("application/vnd.etsi.mheg5"),
    ContentType::new("application/vnd.etsi.overload-control-policy-dataset+xml"),
    ContentType::new("application/vnd.etsi.pstn+xml"),
    ContentType::new("application/vnd.etsi.sci+xml"),
    ContentType::new("application/vnd.etsi.simservs+xml"),
    ContentType::new("application/vnd.etsi.timestamp-token"),
    ContentType::new("application/vnd.etsi.tsl+xml"),
    ContentType::new("application/vnd.etsi.tsl.der"),
    ContentType::new("application/vnd.eu.kasparian.car+json"),
    ContentType::new("application/vnd.eudora.data"),
    ContentType::new("application/vnd.evolv.ecig.profile"),
    ContentType::new("application/vnd.evolv.ecig.settings"),
    ContentType::new("application/vnd.evolv.ecig.theme"),
    ContentType::new("application/vnd.exstream-empower+zip"),
    ContentType::new("application/vnd.exstream-package"),
    ContentType::new("application/vnd.ezpix-album"),
    ContentType::new("application/vnd.ezpix-package"),
    ContentType::new("application/vnd.f-secure.mobile"),
    ContentType::new("application/vnd.familysearch.gedcom+zip"),
    ContentType::new("application/vnd.fastcopy-disk-image"),
    ContentType::new("application/vnd.fdsn.mseed"),
    ContentType::new("application/vnd.fdsn.seed"),
    ContentType::new("application/vnd.ffsns"),
    ContentType::new("application/vnd.ficlab.flb+zip"),
    ContentType::new("application/vnd.filmit.zfc"),
    ContentType::new("application/vnd.fints"),
    ContentType::new("application/vnd.firemonkeys.cloudcell"),
    ContentType::new("application/vnd.flographit"),
    ContentType::new("application/vnd.fluxtime.clip"),
    ContentType::new("application/vnd.font-fontforge-sfd"),
    ContentType::new("application/vnd.framemaker"),
    ContentType::new("application/vnd.fsc.weblaunch"),
    ContentType::new("application/vnd.fujifilm.fb.docuworks"),
    ContentType::new("application/vnd.fujifilm.fb.docuworks.binder"),
    ContentType::new("application/vnd.fujifilm.fb.docuworks.container"),
    ContentType::new("application/vnd.fujifilm.fb.jfi+xml"),
    ContentType::new("application/vnd.fujitsu.oasys"),
    ContentType::new("application/vnd.fujitsu.oasys2"),
    ContentType::new("application/vnd.fujitsu.oasys3"),
    ContentType::new("application/vnd.fujitsu.oasysgp"),
    ContentType::new("application/vnd.fujitsu.oasysprs"),
    ContentType::new("application/vnd.fujixerox.art-ex"),
    ContentType::new("application/vnd.fujixerox.art4"),
    ContentType::new("application/vnd.fujixerox.ddd"),
    ContentType::new("application/vnd.fujixerox.docuworks"),
    ContentType::new("application/vnd.fujixerox.docuworks.binder"),
    ContentType::new("application/vnd.fujixerox.docuworks.container"),
    ContentType::new("application/vnd.fujixerox.hbpl"),
    ContentType::new("application/vnd.fut-misnet"),
    ContentType::new("application/vnd.futoin+cbor"),
    ContentType::new("application/vnd.futoin+json"),
    ContentType::new("application/vnd.fuzzysheet"),
    ContentType::new("application/vnd.genomatix.tuxedo"),
    ContentType::new("application/vnd.genozip"),
    ContentType::new("application/vnd.gentics.grd+json"),
    ContentType::new("application/vnd.gentoo.catmetadata+xml"),
    ContentType::new("application/vnd.gentoo.ebuild"),
    ContentType::new("application/vnd.gentoo.eclass"),
    ContentType::new("application/vnd.gentoo.gpkg"),
    ContentType::new("application/vnd.gentoo.manifest"),
    ContentType::new("application/vnd.gentoo.pkgmetadata+xml"),
    ContentType::new("application/vnd.gentoo.xpak"),
    ContentType::new("application/vnd.geogebra.file"),
    ContentType::new("application/vnd.geogebra.slides"),
    ContentType::new("application/vnd.geogebra.tool"),
    ContentType::new("application/vnd.geometry-explorer"),
    ContentType::new("application/vnd.geonext"),
    ContentType::new("application/vnd.geoplan"),
    ContentType::new("application/vnd.geospace"),
    ContentType::new("application/vnd.gerber"),
    ContentType::new("application/vnd.globalplatform.card-content-mgt"),
    ContentType::new("application/vnd.globalplatform.card-content-mgt-response"),
    ContentType::new("application/vnd.gnu.taler.exchange+json"),
    ContentType::new("application/vnd.gnu.taler.merchant+json"),
    ContentType::new("application/vnd.google-earth.kml+xml"),
    ContentType::new("application/vnd.google-earth.kmz"),
    ContentType::new("application/vnd.gov.sk.e-form+xml"),
    ContentType::new("application/vnd.gov.sk.e-form+zip"),
    ContentType::new("application/vnd.gov.sk.xmldatacontainer+xml"),
    ContentType::new("application/vnd.gpxsee.map+xml"),
    ContentType::new("application/vnd.grafeq"),
    ContentType::new("application/vnd.gridmp"),
    ContentType::new("application/vnd.groove-account"),
    ContentType::new("application/vnd.groove-help"),
    ContentType::new("application/vnd.groove-identity-message"),
    ContentType::new("application/vnd.groove-injector"),
    ContentType::new("application/vnd.groove-tool-message"),
    ContentType::new("application/vnd.groove-tool-template"),
    ContentType::new("application/vnd.groove-vcard"),
    ContentType::new("application/vnd.hal+json"),
    ContentType::new("application/vnd.hal+xml"),
    ContentType::new("application/vnd.handheld-entertainment+xml"),
    ContentType::new("application/vnd.hbci"),
    ContentType::new("application/vnd.hc+json"),
    ContentType::new("application/vnd.hcl-bireports"),
    ContentType::new("application/vnd.hdt"),
    ContentType::new("application/vnd.heroku+json"),
    ContentType::new("application/vnd.hhe.lesson-player"),
    ContentType::new("application/vnd.hp-hpgl"),
    ContentType::new("application/vnd.hp-hpid"),
    ContentType::new("application/vnd.hp-hps"),
    ContentType::new("application/vnd.hp-jlyt"),
    ContentType::new("application/vnd.hp-pcl"),
    ContentType::new("application/vnd.hp-pclxl"),
    ContentType::new("application/vnd.httphone"),
    ContentType::new("application/vnd.hydrostatix.sof-data"),
    ContentType::new("application/vnd.hyper+json"),
    ContentType::new("application/vnd.hyper-item+json"),
    ContentType::new("application/vnd.hyperdrive+json"),
    ContentType::new("application/vnd.hzn-3d-crossword"),
    ContentType::new("application/vnd.ibm.electronic-media"),
    ContentType::new("application/vnd.ibm.minipay"),
    ContentType::new("application/vnd.ibm.rights-management"),
    ContentType::new("application/vnd.ibm.secure-container"),
    ContentType::new("application/vnd.iccprofile"),
    ContentType::new("application/vnd.ieee.1905"),
    ContentType::new("application/vnd.igloader"),
    ContentType::new("application/vnd.imagemeter.folder+zip"),
    ContentType::new("application/vnd.imagemeter.image+zip"),
    ContentType::new("application/vnd.immervision-ivp"),
    ContentType::new("application/vnd.immervision-ivu"),
    ContentType::new("application/vnd.ims.imsccv1p1"),
    ContentType::new("application/vnd.ims.imsccv1p2"),
    ContentType::new("application/vnd.ims.imsccv1p3"),
    ContentType::new("application/vnd.ims.lis.v2.result+json"),
    ContentType::new("application/vnd.ims.lti.v2.toolconsumerprofile+json"),
    ContentType::new("application/vnd.ims.lti.v2.toolproxy+json"),
    ContentType::new("application/vnd.ims.lti.v2.toolproxy.id+json"),
    ContentType::new("application/vnd.ims.lti.v2.toolsettings+json"),
    ContentType::new("application/vnd.ims.lti.v2.toolsettings.simple+json"),
    ContentType::new("application/vnd.informedcontrol.rms+xml"),
    ContentType::new("application/vnd.infotech.project"),
    ContentType::new("application/vnd.infotech.project+xml"),
    ContentType::new("application/vnd.innopath.wamp.notification"),
    ContentType::new("application/vnd.insors.igm"),
    ContentType::new("application/vnd.intercon.formnet"),
    ContentType::new("application/vnd.intergeo"),
    ContentType::new("application/vnd.intertrust.digibox"),
    ContentType::new("application/vnd.intertrust.nncp"),
    ContentType::new("application/vnd.intu.qbo"),
    ContentType::new("application/vnd.intu.qfx"),
    ContentType::new("application/vnd.ipld.car"),
    ContentType::new("application/vnd.ipld.dag-cbor"),
    ContentType::new("application/vnd.ipld.dag-json"),
    ContentType::new("application/vnd.ipld.raw"),
    ContentType::new("application/vnd.iptc.g2.catalogitem+xml"),
    ContentType::new("application/vnd.iptc.g2.conceptitem+xml"),
    ContentType::new("application/vnd.iptc.g2.knowledgeitem+xml"),
    ContentType::new("application/vnd.iptc.g2.newsitem+xml"),
    ContentType::new("application/vnd.iptc.g2.newsmessage+xml"),
    ContentType::new("application/vnd.iptc.g2.packageitem+xml"),
    ContentType::new("application/vnd.iptc.g2.planningitem+xml"),
    ContentType::new("application/vnd.ipunplugged.rcprofile"),
    ContentType::new("application/vnd.irepository.package+xml"),
    ContentType::new("application/vnd.is-xpr"),
    ContentType::new("application/vnd.isac.fcs"),
    ContentType::new("application/vnd.iso11783-10+zip"),
    ContentType::new("application/vnd.jam"),
    ContentType::new("application/vnd.japannet-directory-service"),
    ContentType::new("application/vnd.japannet-jpnstore-wakeup"),
    ContentType::new("application/vnd.japannet-payment-wakeup"),
    ContentType::new("application/vnd.japannet-registration"),
    ContentType::new("application/vnd.japannet-registration-wakeup"),
    ContentType::new("application/vnd.japannet-setstore-wakeup"),
    ContentType::new("application/vnd.japannet-verification"),
    ContentType::new("application/vnd.japannet-verification-wakeup"),
    ContentType::new("application/vnd.jcp.javame.midlet-rms"),
    ContentType::new("application/vnd.jisp"),
    ContentType::new("application/vnd.joost.joda-archive"),
    ContentType::new("application/vnd.jsk.isdn-ngn"),
    ContentType::new("application/vnd.kahootz"),
    ContentType::new("application/vnd.kde.karbon"),
    ContentType::new("application/vnd.kde.kchart"),
    ContentType::new("application/vnd.kde.kformula"),
    ContentType::new("application/vnd.kde.kivio"),
    ContentType::new("application/vnd.kde.kontour"),
    ContentType::new("application/vnd.kde.kpresenter"),
    ContentType::new("application/vnd.kde.kspread"),
    ContentType::new("application/vnd.kde.kword"),
    ContentType::new("application/vnd.kenameaapp"),
    ContentType::new("application/vnd.kidspiration"),
    ContentType::new("application/vnd.kinar"),
    ContentType::new("application/vnd.koan"),
    ContentType::new("application/vnd.kodak-descriptor"),
    ContentType::new("application/vnd.las"),
    ContentType::new("application/vnd.las.las+json"),
    ContentType::new("application/vnd.las.las+xml"),
    ContentType::new("application/vnd.laszip"),
    ContentType::new("application/vnd.leap+json"),
    ContentType::new("application/vnd.liberty-request+xml"),
    ContentType::new("application/vnd.llamagraphics.life-balance.desktop"),
    ContentType::new("application/vnd.llamagraphics.life-balance.exchange+xml"),
    ContentType::new("application/vnd.logipipe.circuit+zip"),
    ContentType::new("application/vnd.loom"),
    ContentType::new("application/vnd.lotus-1-2-3"),
    ContentType::new("application/vnd.lotus-approach"),
    ContentType::new("application/vnd.lotus-freelance"),
    ContentType::new("application/vnd.lotus-notes"),
    ContentType::new("application/vnd.lotus-organizer"),
    ContentType::new("application/vnd.lotus-screencam"),
    ContentType::new("application/vnd.lotus-wordpro"),
    ContentType::new("application/vnd.macports.portpkg"),
    ContentType::new("application/vnd.mapbox-vector-tile"),
    ContentType::new("application/vnd.marlin.drm.actiontoken+xml"),
    ContentType::new("application/vnd.marlin.drm.conftoken+xml"),
    ContentType::new("application/vnd.marlin.drm.license+xml"),
    ContentType::new("application/vnd.marlin.drm.mdcf"),
    ContentType::new("application/vnd.mason+json"),
    ContentType::new("application/vnd.maxar.archive.3tz+zip"),
    ContentType::new("application/vnd.maxmind.maxmind-db"),
    ContentType::new("application/vnd.mcd"),
    ContentType::new("application/vnd.medcalcdata"),
    ContentType::new("application/vnd.mediastation.cdkey"),
    ContentType::new("application/vnd.medicalholodeck.recordxr"),
    ContentType::new("application/vnd.meridian-slingshot"),
    ContentType::new("application/vnd.mfer"),
    ContentType::new("application/vnd.mfmp"),
    ContentType::new("application/vnd.micro+json"),
    ContentType::new("application/vnd.micrografx.flo"),
    ContentType::new("application/vnd.micrografx.igx"),
    ContentType::new("application/vnd.microsoft.portable-executable"),
    ContentType::new("application/vnd.microsoft.windows.thumbnail-cache"),
    ContentType::new("application/vnd.miele+json"),
    ContentType::new("application/vnd.mif"),
    ContentType::new("application/vnd.minisoft-hp3000-save"),
    ContentType::new("application/vnd.mitsubishi.misty-guard.trustweb"),
    ContentType::new("application/vnd.mobius.daf"),
    ContentType::new("application/vnd.mobius.dis"),
    ContentType::new("application/vnd.mobius.mbk"),
    ContentType::new("application/vnd.mobius.mqy"),
    ContentType::new("application/vnd.mobius.msl"),
    ContentType::new("application/vnd.mobius.plc"),
    ContentType::new("application/vnd.mobius.txf"),
    ContentType::new("application/vnd.mophun.application"),
    ContentType::new("application/vnd.mophun.certificate"),
    ContentType::new("application/vnd.motorola.flexsuite"),
    ContentType::new("application/vnd.motorola.flexsuite.adsi"),
    ContentType::new("application/vnd.motorola.flexsuite.fis"),
    ContentType::new("application/vnd.motorola.flexsuite.gotap"),
    ContentType::new("application/vnd.motorola.flexsuite.kmr"),
    ContentType::new("application/vnd.motorola.flexsuite.ttc"),
    ContentType::new("application/vnd.motorola.flexsuite.wem"),
    ContentType::new("application/vnd.motorola.iprm"),
    ContentType::new("application/vnd.mozilla.xul+xml"),
    ContentType::new("application/vnd.ms-3mfdocument"),
    ContentType::new("application/vnd.ms-artgalry"),
    ContentType::new("application/vnd.ms-asf"),
    ContentType::new("application/vnd.ms-cab-compressed"),
    ContentType::new("application/vnd.ms-excel"),
    ContentType::new("application/vnd.ms-excel.addin.macroenabled.12"),
    ContentType::new("application/vnd.ms-excel.sheet.binary.macroenabled.12"),
    ContentType::new("application/vnd.ms-excel.sheet.macroenabled.12"),
    ContentType::new("application/vnd.ms-excel.template.macroenabled.12"),
    ContentType::new("application/vnd.ms-fontobject"),
    ContentType::new("application/vnd.ms-htmlhelp"),
    ContentType::new("application/vnd.ms-ims"),
    ContentType::new("application/vnd.ms-lrm"),
    ContentType::new("application/vnd.ms-office.activex+xml"),
    ContentType::new("application/vnd.ms-officetheme"),
    ContentType::new("application/vnd.ms-pki.seccat"),
    ContentType::new("application/vnd.ms-playready.initiator+xml"),
    ContentType::new("application/vnd.ms-powerpoint"),
    ContentType::new("application/vnd.ms-powerpoint.addin.macroenabled.12"),
    ContentType::new("application/vnd.ms-powerpoint.presentation.macroenabled.12"),
    ContentType::new("application/vnd.ms-powerpoint.slide.macroenabled.12"),
    ContentType::new("application/vnd.ms-powerpoint.slideshow.macroenabled.12"),
    ContentType::new("application/vnd.ms-powerpoint.template.macroenabled.12"),
    ContentType::new("application/vnd.ms-printdevicecapabilities+xml"),
    ContentType::new("application/vnd.ms-printschematicket+xml"),
    ContentType::new("application/vnd.ms-project"),
    ContentType::new("application/vnd.ms-tnef"),
    ContentType::new("application/vnd.ms-windows.devicepairing"),
    ContentType::new("application/vnd.ms-windows.nwprinting.oob"),
    ContentType::new("application/vnd.ms-windows.printerpairing"),
    ContentType::new("application/vnd.ms-windows.wsd.oob"),
    ContentType::new("application/vnd.ms-wmdrm.lic-chlg-req"),
    ContentType::new("application/vnd.ms-wmdrm.lic-resp"),
    ContentType::new("application/vnd.ms-wmdrm.meter-chlg-req"),
    ContentType::new("application/vnd.ms-wmdrm.meter-resp"),
    ContentType::new("application/vnd.ms-word.document.macroenabled.12"),
    ContentType::new("application/vnd.ms-word.template.macroenabled.12"),
    ContentType::new("application/vnd.ms-works"),
    ContentType::new("application/vnd.ms-wpl"),
    ContentType::new("application/vnd.ms-xpsdocument"),
    ContentType::new("application/vnd.msa-disk-image"),
    ContentType::new("application/vnd.mseq"),
    ContentType::new("application/vnd.msign"),
    ContentType::new("application/vnd.multiad.creator"),
    ContentType::new("application/vnd.multiad.creator.cif"),
    ContentType::new("application/vnd.music-niff"),
    ContentType::new("application/vnd.musician"),
    ContentType::new("application/vnd.muvee.style"),
    ContentType::new("application/vnd.mynfc"),
    ContentType::new("application/vnd.nacamar.ybrid+json"),
    ContentType::new("application/vnd.ncd.control"),
    ContentType::new("application/vnd.ncd.reference"),
    ContentType::new("application/vnd.nearst.inv+json"),
    ContentType::new("application/vnd.nebumind.line"),
    ContentType::new("application/vnd.nervana"),
    ContentType::new("application/vnd.netfpx"),
    ContentType::new("application/vnd.neurolanguage.nlu"),
    ContentType::new("application/vnd.nimn"),
    ContentType::new("application/vnd.nintendo.nitro.rom"),
    ContentType::new("application/vnd.nintendo.snes.rom"),
    ContentType::new("application/vnd.nitf"),
    ContentType::new("application/vnd.noblenet-directory"),
    ContentType::new("application/vnd.noblenet-sealer"),
    ContentType::new("application/vnd.noblenet-web"),
    ContentType::new("application/vnd.nokia.catalogs"),
    ContentType::new("application/vnd.nokia.conml+wbxml"),
    ContentType::new("application/vnd.nokia.conml+xml"),
    ContentType::new("application/vnd.nokia.iptv.config+xml"),
    ContentType::new("application/vnd.nokia.isds-radio-presets"),
    ContentType::new("application/vnd.nokia.landmark+wbxml"),
    ContentType::new("application/vnd.nokia.landmark+xml"),
    ContentType::new("application/vnd.nokia.landmarkcollection+xml"),
    ContentType::new("application/vnd.nokia.n-gage.ac+xml"),
    ContentType::new("application/vnd.nokia.n-gage.data"),
    ContentType::new("application/vnd.nokia.ncd"),
    ContentType::new("application/vnd.nokia.pcd+wbxml"),
    ContentType::new("application/vnd.nokia.pcd+xml"),
    ContentType::new("application/vnd.nokia.radio-preset"),
    ContentType::new("application/vnd.nokia.radio-presets"),
    ContentType::new("application/vnd.novadigm.edm"),
    ContentType::new("application/vnd.novadigm.edx"),
    ContentType::new("application/vnd.novadigm.ext"),
    ContentType::new("application/vnd.ntt-local.content-share"),
    ContentType::new("application/vnd.ntt-local.file-transfer"),
    ContentType::new("application/vnd.ntt-local.ogw_remote-access"),
    ContentType::new("application/vnd.ntt-local.sip-ta_remote"),
    ContentType::new("application/vnd.ntt-local.sip-ta_tcp_stream"),
    ContentType::new("application/vnd.oasis.opendocument.base"),
    ContentType::new("application/vnd.oasis.opendocument.chart"),
    ContentType::new("application/vnd.oasis.opendocument.chart-template"),
    ContentType::new("application/vnd.oasis.opendocument.formula"),
    ContentType::new("application/vnd.oasis.opendocument.formula-template"),
    ContentType::new("application/vnd.oasis.opendocument.graphics"),
    ContentType::new("application/vnd.oasis.opendocument.graphics-template"),
    ContentType::new("application/vnd.oasis.opendocument.image"),
    ContentType::new("application/vnd.oasis.opendocument.image-template"),
    ContentType::new("application/vnd.oasis.opendocument.presentation"),
    ContentType::new("application/vnd.oasis.opendocument.presentation-template"),
    ContentType::new("application/vnd.oasis.opendocument.spreadsheet"),
    ContentType::new("application/vnd.oasis.opendocument.spreadsheet-template"),
    ContentType::new("application/vnd.oasis.opendocument.text"),
    ContentType::new("application/vnd.oasis.opendocument.text-master"),
    ContentType::new("application/vnd.oasis.opendocument.text-template"),
    ContentType::new("application/vnd.oasis.opendocument.text-web"),
    ContentType::new("application/vnd.obn"),
    ContentType::new("application/vnd.ocf+cbor"),
    ContentType::new("application/vnd.oci.image.manifest.v1+json"),
    ContentType::new("application/vnd.oftn.l10n+json"),
    ContentType::new("application/vnd.oipf.contentaccessdownload+xml"),
    ContentType::new("application/vnd.oipf.contentaccessstreaming+xml"),
    ContentType::new("application/vnd.oipf.cspg-hexbinary"),
    ContentType::new("application/vnd.oipf.dae.svg+xml"),
    ContentType::new("application/vnd.oipf.dae.xhtml+xml"),
    ContentType::new("application/vnd.oipf.mippvcontrolmessage+xml"),
    ContentType::new("application/vnd.oipf.pae.gem"),
    ContentType::new("application/vnd.oipf.spdiscovery+xml"),
    ContentType::new("application/vnd.oipf.spdlist+xml"),
    ContentType::new("application/vnd.oipf.ueprofile+xml"),
    ContentType::new("application/vnd.oipf.userprofile+xml"),
    ContentType::new("application/vnd.olpc-sugar"),
    ContentType::new("application/vnd.oma-scws-config"),
    ContentType::new("application/vnd.oma-scws-http-request"),
    ContentType::new("application/vnd.oma-scws-http-response"),
    ContentType::new("application/vnd.oma.bcast.associated-procedure-parameter+xml"),
    ContentType::new("application/vnd.oma.bcast.drm-trigger+xml"),
    ContentType::new("application/vnd.oma.bcast.imd+xml"),
    ContentType::new("application/vnd.oma.bcast.ltkm"),
    ContentType::new("application/vnd.oma.bcast.notification+xml"),
    ContentType::new("application/vnd.oma.bcast.provisioningtrigger"),
    ContentType::new("application/vnd.oma.bcast.sgboot"),
    ContentType::new("application/vnd.oma.bcast.sgdd+xml"),
    ContentType::new("application/vnd.oma.bcast.sgdu"),
    ContentType::new("application/vnd.oma.bcast.simple-symbol-container"),
    ContentType::new("application/vnd.oma.bcast.smartcard-trigger+xml"),
    ContentType::new("application/vnd.oma.bcast.sprov+xml"),
    ContentType::new("application/vnd.oma.bcast.stkm"),
    ContentType::new("application/vnd.oma.cab-address-book+xml"),
    ContentType::new("application/vnd.oma.cab-feature-handler+xml"),
    ContentType::new("application/vnd.oma.cab-pcc+xml"),
    ContentType::new("application/vnd.oma.cab-subs-invite+xml"),
    ContentType::new("application/vnd.oma.cab-user-prefs+xml"),
    ContentType::new("application/vnd.oma.dcd"),
    ContentType::new("application/vnd.oma.dcdc"),
    ContentType::new("application/vnd.oma.dd2+xml"),
    ContentType::new("application/vnd.oma.drm.risd+xml"),
    ContentType::new("application/vnd.oma.group-usage-list+xml"),
    ContentType::new("application/vnd.oma.lwm2m+cbor"),
    ContentType::new("application/vnd.oma.lwm2m+json"),
    ContentType::new("application/vnd.oma.lwm2m+tlv"),
    ContentType::new("application/vnd.oma.pal+xml"),
    ContentType::new("application/vnd.oma.poc.detailed-progress-report+xml"),
    ContentType::new("application/vnd.oma.poc.final-report+xml"),
    ContentType::new("application/vnd.oma.poc.groups+xml"),
    ContentType::new("application/vnd.oma.poc.invocation-descriptor+xml"),
    ContentType::new("application/vnd.oma.poc.optimized-progress-report+xml"),
    ContentType::new("application/vnd.oma.push"),
    ContentType::new("application/vnd.oma.scidm.messages+xml"),
    ContentType::new("application/vnd.oma.xcap-directory+xml"),
    ContentType::new("application/vnd.omads-email+xml"),
    ContentType::new("application/vnd.omads-file+xml"),
    ContentType::new("application/vnd.omads-folder+xml"),
    ContentType::new("application/vnd.omaloc-supl-init"),
    ContentType::new("application/vnd.onepager"),
    ContentType::new("application/vnd.onepagertamp"),
    ContentType::new("application/vnd.onepagertamx"),
    ContentType::new("application/vnd.onepagertat"),
    ContentType::new("application/vnd.onepagertatp"),
    ContentType::new("application/vnd.onepagertatx"),
    ContentType::new("application/vnd.onvif.metadata"),
    ContentType::new("application/vnd.openblox.game+xml"),
    ContentType::new("application/vnd.openblox.game-binary"),
    ContentType::new("application/vnd.openeye.oeb"),
    ContentType::new("application/vnd.openofficeorg.extension"),
    ContentType::new("application/vnd.openstreetmap.data+xml"),
    ContentType::new("application/vnd.opentimestamps.ots"),
    ContentType::new("application/vnd.openxmlformats-officedocument.custom-properties+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.customxmlproperties+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawing+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.chart+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.chartshapes+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramcolors+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramdata+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramlayout+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.drawingml.diagramstyle+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.commentauthors+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.comments+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.handoutmaster+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.notesmaster+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.notesslide+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.presprops+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slide"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slide+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slidelayout+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slidemaster+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.slideupdateinfo+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.tablestyles+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.tags+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.template"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.template.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.presentationml.viewprops+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.calcchain+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.chartsheet+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.comments+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.connections+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.dialogsheet+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.externallink+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotcachedefinition+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivotcacherecords+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.pivottable+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.querytable+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionheaders+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.revisionlog+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sharedstrings+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheetmetadata+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.table+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.tablesinglecells+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.template.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.usernames+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.volatiledependencies+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.theme+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.themeoverride+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.vmldrawing"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.comments+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.glossary+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.fonttable+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml"),
    ContentType::new("application/vnd.openxmlformats-officedocument.wordprocessingml.websettings+xml"),
    ContentType::new("application/vnd.openxmlformats-package.core-properties+xml"),
    ContentType::new("application/vnd.openxmlformats-package.digital-signature-xmlsignature+xml"),
    ContentType::new("application/vnd.openxmlformats-package.relationships+xml"),
    ContentType::new("application/vnd.oracle.resource+json"),
    ContentType::new("application/vnd.orange.indata"),
    ContentType::new("application/vnd.osa.netdeploy"),
    ContentType::new("application/vnd.osgeo.mapguide.package"),
    ContentType::new("application/vnd.osgi.bundle"),
    ContentType::new("application/vnd.osgi.dp"),
    ContentType::new("application/vnd.osgi.subsystem"),
    ContentType::new("application/vnd.otps.ct-kip+xml"),
    ContentType::new("application/vnd.oxli.countgraph"),
    ContentType::new("application/vnd.pagerduty+json"),
    ContentType::new("application/vnd.palm"),
    ContentType::new("application/vnd.panoply"),
    ContentType::new("application/vnd.paos.xml"),
    ContentType::new("application/vnd.patentdive"),
    ContentType::new("application/vnd.patientecommsdoc"),
    ContentType::new("application/vnd.pawaafile"),
    ContentType::new("application/vnd.pcos"),
    ContentType::new("application/vnd.pg.format"),
    ContentType::new("application/vnd.pg.osasli"),
    ContentType::new("application/vnd.piaccess.application-licence"),
    ContentType::new("application/vnd.picsel"),
    ContentType::new("application/vnd.pmi.widget"),
    ContentType::new("application/vnd.poc.group-advertisement+xml"),
    ContentType::new("application/vnd.pocketlearn"),
    ContentType::new("application/vnd.powerbuilder6"),
    ContentType::new("application/vnd.powerbuilder6-s"),
    ContentType::new("application/vnd.powerbuilder7"),
    ContentType::new("application/vnd.powerbuilder7-s"),
    ContentType::new("application/vnd.powerbuilder75"),
    ContentType::new("application/vnd.powerbuilder75-s"),
    ContentType::new("application/vnd.preminet"),
    ContentType::new("application/vnd.previewsystems.box"),
    ContentType::new("application/vnd.proteus.magazine"),
    ContentType::new("application/vnd.psfs"),
    ContentType::new("application/vnd.publishare-delta-tree"),
    ContentType::new("application/vnd.pvi.ptid1"),
    ContentType::new("application/vnd.pwg-multiplexed"),
    ContentType::new("application/vnd.pwg-xhtml-print+xml"),
    ContentType::new("application/vnd.qualcomm.brew-app-res"),
    ContentType::new("application/vnd.quarantainenet"),
    ContentType::new("application/vnd.quark.quarkxpress"),
    ContentType::new("application/vnd.quobject-quoxdocument"),
    ContentType::new("application/vnd.radisys.moml+xml"),
    ContentType::new("application/vnd.radisys.msml+xml"),
    ContentType::new("application/vnd.radisys.msml-audit+xml"),
    ContentType::new("application/vnd.radisys.msml-audit-conf+xml"),
    ContentType::new("application/vnd.radisys.msml-audit-conn+xml"),
    ContentType::new("application/vnd.radisys.msml-audit-dialog+xml"),
    ContentType::new("application/vnd.radisys.msml-audit-stream+xml"),
    ContentType::new("application/vnd.radisys.msml-conf+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-base+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-fax-detect+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-fax-sendrecv+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-group+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-speech+xml"),
    ContentType::new("application/vnd.radisys.msml-dialog-transform+xml"),
    ContentType::new("application/vnd.rainstor.data"),
    ContentType::new("application/vnd.rapid"),
    ContentType::new("application/vnd.rar"),
    ContentType::new("application/vnd.realvnc.bed"),
    ContentType::new("application/vnd.recordare.musicxml"),
    ContentType::new("application/vnd.recordare.musicxml+xml"),
    ContentType::new("application/vnd.renlearn.rlprint"),
    ContentType::new("application/vnd.resilient.logic"),
    ContentType::new("application/vnd.restful+json"),
    ContentType::new("application/vnd.rig.cryptonote"),
    ContentType::new("application/vnd.rim.cod"),
    ContentType::new("application/vnd.route66.link66+xml"),
    ContentType::new("application/vnd.rs-274x"),
    ContentType::new("application/vnd.ruckus.download"),
    ContentType::new("application/vnd.s3sms"),
    ContentType::new("application/vnd.sailingtracker.track"),
    ContentType::new("application/vnd.sar"),
    ContentType::new("application/vnd.sbm.cid"),
    ContentType::new("application/vnd.sbm.mid2"),
    ContentType::new("application/vnd.scribus"),
    ContentType::new("application/vnd.sealed.3df"),
    ContentType::new("application/vnd.sealed.csf"),
    ContentType::new("application/vnd.sealed.doc"),
    ContentType::new("application/vnd.sealed.eml"),
    ContentType::new("application/vnd.sealed.mht"),
    ContentType::new("application/vnd.sealed.net"),
    ContentType::new("application/vnd.sealed.ppt"),
    ContentType::new("application/vnd.sealed.tiff"),
    ContentType::new("application/vnd.sealed.xls"),
    ContentType::new("application/vnd.sealedmedia.softseal.html"),
    ContentType::new("application/vnd.sealedmedia.softseal.pdf"),
    ContentType::new("application/vnd.seemail"),
    ContentType::new("application/vnd.seis+json"),
    ContentType::new("application/vnd.sema"),
    ContentType::new("application/vnd.semd"),
    ContentType::new("application/vnd.semf"),
    ContentType::new("application/vnd.shade-save-file"),
    ContentType::new("application/vnd.shana.informed.formdata"),
    ContentType::new("application/vnd.shana.informed.formtemplate"),
    ContentType::new("application/vnd.shana.informed.interchange"),
    ContentType::new("application/vnd.shana.informed.package"),
    ContentType::new("application/vnd.shootproof+json"),
    ContentType::new("application/vnd.shopkick+json"),
    ContentType::new("application/vnd.shp"),
    ContentType::new("application/vnd.shx"),
    ContentType::new("application/vnd.sigrok.session"),
    ContentType::new("application/vnd.simtech-mindmapper"),
    ContentType::new("application/vnd.siren+json"),
    ContentType::new("application/vnd.smaf"),
    ContentType::new("application/vnd.smart.notebook"),
    ContentType::new("application/vnd.smart.teacher"),
    ContentType::new("application/vnd.snesdev-page-table"),
    ContentType::new("application/vnd.software602.filler.form+xml"),
    ContentType::new("application/vnd.software602.filler.form-xml-zip"),
    ContentType::new("application/vnd.solent.sdkm+xml"),
    ContentType::new("application/vnd.spotfire.dxp"),
    ContentType::new("application/vnd.spotfire.sfs"),
    ContentType::new("application/vnd.sqlite3"),
    ContentType::new("application/vnd.sss-cod"),
    ContentType::new("application/vnd.sss-dtf"),
    ContentType::new("application/vnd.sss-ntf"),
    ContentType::new("application/vnd.stardivision.calc"),
    ContentType::new("application/vnd.stardivision.chart"),
    ContentType::new("application/vnd.stardivision.draw"),
    ContentType::new("application/vnd.stardivision.impress"),
    ContentType::new("application/vnd.stardivision.math"),
    ContentType::new("application/vnd.stardivision.writer"),
    ContentType::new("application/vnd.stardivision.writer-global"),
    ContentType::new("application/vnd.stepmania.package"),
    ContentType::new("application/vnd.stepmania.stepchart"),
    ContentType::new("application/vnd.street-stream"),
    ContentType::new("application/vnd.sun.wadl+xml"),
    ContentType::new("application/vnd.sun.xml.calc"),
    ContentType::new("application/vnd.sun.xml.calc.template"),
    ContentType::new("application/vnd.sun.xml.draw"),
    ContentType::new("application/vnd.sun.xml.draw.template"),
    ContentType::new("application/vnd.sun.xml.impress"),
    ContentType::new("application/vnd.sun.xml.impress.template"),
    ContentType::new("application/vnd.sun.xml.math"),
    ContentType::new("application/vnd.sun.xml.writer"),
    ContentType::new("application/vnd.sun.xml.writer.global"),
    ContentType::new("application/vnd.sun.xml.writer.template"),
    ContentType::new("application/vnd.sus-calendar"),
    ContentType::new("application/vnd.svd"),
    ContentType::new("application/vnd.swiftview-ics"),
    ContentType::new("application/vnd.sybyl.mol2"),
    ContentType::new("application/vnd.sycle+xml"),
    ContentType::new("application/vnd.syft+json"),
    ContentType::new("application/vnd.symbian.install"),
    ContentType::new("application/vnd.syncml+xml"),
    ContentType::new("application/vnd.syncml.dm+wbxml"),
    ContentType::new("application/vnd.syncml.dm+xml"),
    ContentType::new("application/vnd.syncml.dm.notification"),
    ContentType::new("application/vnd.syncml.dmddf+wbxml"),
    ContentType::new("application/vnd.syncml.dmddf+xml"),
    ContentType::new("application/vnd.syncml.dmtnds+wbxml"),
    ContentType::new("application/vnd.syncml.dmtnds+xml"),
    ContentType::new("application/vnd.syncml.ds.notification"),
    ContentType::new("application/vnd.tableschema+json"),
    ContentType::new("application/vnd.tao.intent-module-archive"),
    ContentType::new("application/vnd.tcpdump.pcap"),
    ContentType::new("application/vnd.theqvd"),
    ContentType::new("application/vnd.think-cell.ppttc+json"),
    ContentType::new("application/vnd.tmd.mediaflex.api+xml"),
    ContentType::new("application/vnd.tml"),
    ContentType::new("application/vnd.tmobile-livetv"),
    ContentType::new("application/vnd.tri.onesource"),
    ContentType::new("application/vnd.trid.tpt"),
    ContentType::new("application/vnd.triscape.mxs"),
    ContentType::new("application/vnd.trueapp"),
    ContentType::new("application/vnd.truedoc"),
    ContentType::new("application/vnd.ubisoft.webplayer"),
    ContentType::new("application/vnd.ufdl"),
    ContentType::new("application/vnd.uiq.theme"),
    ContentType::new("application/vnd.umajin"),
    ContentType::new("application/vnd.unity"),
    ContentType::new("application/vnd.uoml+xml"),
    ContentType::new("application/vnd.uplanet.alert"),
    ContentType::new("application/vnd.uplanet.alert-wbxml"),
    ContentType::new("application/vnd.uplanet.bearer-choice"),
    ContentType::new("application/vnd.uplanet.bearer-choice-wbxml"),
    ContentType::new("application/vnd.uplanet.cacheop"),
    ContentType::new("application/vnd.uplanet.cacheop-wbxml"),
    ContentType::new("application/vnd.uplanet.channel"),
    ContentType::new("application/vnd.uplanet.channel-wbxml"),
    ContentType::new("application/vnd.uplanet.list"),
    ContentType::new("application/vnd.uplanet.list-wbxml"),
    ContentType::new("application/vnd.uplanet.listcmd"),
    ContentType::new("application/vnd.uplanet.listcmd-wbxml"),
    ContentType::new("application/vnd.uplanet.signal"),
    ContentType::new("application/vnd.uri-map"),
    ContentType::new("application/vnd.valve.source.material"),
    ContentType::new("application/vnd.vcx"),
    ContentType::new("application/vnd.vd-study"),
    ContentType::new("application/vnd.vectorworks"),
    ContentType::new("application/vnd.vel+json"),
    ContentType::new("application/vnd.verimatrix.vcas"),
    ContentType::new("application/vnd.veritone.aion+json"),
    ContentType::new("application/vnd.veryant.thin"),
    ContentType::new("application/vnd.ves.encrypted"),
    ContentType::new("application/vnd.vidsoft.vidconference"),
    ContentType::new("application/vnd.visio"),
    ContentType::new("application/vnd.visionary"),
    ContentType::new("application/vnd.vividence.scriptfile"),
    ContentType::new("application/vnd.vsf"),
    ContentType::new("application/vnd.wap.sic"),
    ContentType::new("application/vnd.wap.slc"),
    ContentType::new("application/vnd.wap.wbxml"),
    ContentType::new("application/vnd.wap.wmlc"),
    ContentType::new("application/vnd.wap.wmlscriptc"),
    ContentType::new("application/vnd.wasmflow.wafl"),
    ContentType::new("application/vnd.webturbo"),
    ContentType::new("application/vnd.wfa.dpp"),
    ContentType::new("application/vnd.wfa.p2p"),
    ContentType::new("application/vnd.wfa.wsc"),
    ContentType::new("application/vnd.windows.devicepairing"),
    ContentType::new("application/vnd.wmc"),
    ContentType::new("application/vnd.wmf.bootstrap"),
    ContentType::new("application/vnd.wolfram.mathematica"),
    ContentType::new("application/vnd.wolfram.mathematica.package"),
    ContentType::new("application/vnd.wolfram.player"),
    ContentType::new("application/vnd.wordlift"),
    ContentType::new("application/vnd.wordperfect"),
    ContentType::new("application/vnd.wqd"),
    ContentType::new("application/vnd.wrq-hp3000-labelled"),
    ContentType::new("application/vnd.wt.stf"),
    ContentType::new("application/vnd.wv.csp+wbxml"),
    ContentType::new("application/vnd.wv.csp+xml"),
    ContentType::new("application/vnd.wv.ssp+xml"),
    ContentType::new("application/vnd.xacml+json"),
    ContentType::new("application/vnd.xara"),
    ContentType::new("application/vnd.xfdl"),
    ContentType::new("application/vnd.xfdl.webform"),
    ContentType::new("application/vnd.xmi+xml"),
    ContentType::new("application/vnd.xmpie.cpkg"),
    ContentType::new("application/vnd.xmpie.dpkg"),
    ContentType::new("application/vnd.xmpie.plan"),
    ContentType::new("application/vnd.xmpie.ppkg"),
    ContentType::new("application/vnd.xmpie.xlim"),
    ContentType::new("application/vnd.yamaha.hv-dic"),
    ContentType::new("application/vnd.yamaha.hv-script"),
    ContentType::new("application/vnd.yamaha.hv-voice"),
    ContentType::new("application/vnd.yamaha.openscoreformat"),
    ContentType::new("application/vnd.yamaha.openscoreformat.osfpvg+xml"),
    ContentType::new("application/vnd.yamaha.remote-setup"),
    ContentType::new("application/vnd.yamaha.smaf-audio"),
    ContentType::new("application/vnd.yamaha.smaf-phrase"),
    ContentType::new("application/vnd.yamaha.through-ngn"),
    ContentType::new("application/vnd.yamaha.tunnel-udpencap"),
    ContentType::new("application/vnd.yaoweme"),
    ContentType::new("application/vnd.yellowriver-custom-menu"),
    ContentType::new("application/vnd.zul"),
    ContentType::new("application/vnd.zzazz.deck+xml"),
    ContentType::new("application/voicexml+xml"),
    ContentType::new("application/voucher-cms+json"),
    ContentType::new("application/vq-rtcpxr"),
    ContentType::new("application/wasm"),
    ContentType::new("application/watcherinfo+xml"),
    ContentType::new("application/webpush-options+json"),
    ContentType::new("application/whoispp-query"),
    ContentType::new("application/whoispp-response"),
    ContentType::new("application/widget"),
    ContentType::new("application/wita"),
    ContentType::new("application/wordperfect5.1"),
    ContentType::new("application/wsdl+xml"),
    ContentType::new("application/wspolicy+xml"),
    ContentType::new("application/x-123"),
    ContentType::new("application/x-7z-compressed"),
    ContentType::new("application/x-abiword"),
    ContentType::new("application/x-apple-diskimage"),
    ContentType::new("application/x-bcpio"),
    ContentType::new("application/x-bittorrent"),
    ContentType::new("application/x-cdf"),
    ContentType::new("application/x-cdlink"),
    ContentType::new("application/x-comsol"),
    ContentType::new("application/x-cpio"),
    ContentType::new("application/x-csh"),
    ContentType::new("application/x-director"),
    ContentType::new("application/x-doom"),
    ContentType::new("application/x-dvi"),
    ContentType::new("application/x-font"),
    ContentType::new("application/x-font-pcf"),
    ContentType::new("application/x-freemind"),
    ContentType::new("application/x-ganttproject"),
    ContentType::new("application/x-gnumeric"),
    ContentType::new("application/x-go-sgf"),
    ContentType::new("application/x-graphing-calculator"),
    ContentType::new("application/x-gtar"),
    ContentType::new("application/x-gtar-compressed"),
    ContentType::new("application/x-hdf"),
    ContentType::new("application/x-hwp"),
    ContentType::new("application/x-ica"),
    ContentType::new("application/x-info"),
    ContentType::new("application/x-internet-signup"),
    ContentType::new("application/x-iphone"),
    ContentType::new("application/x-iso9660-image"),
    ContentType::new("application/x-java-jnlp-file"),
    ContentType::new("application/x-jmol"),
    ContentType::new("application/x-killustrator"),
    ContentType::new("application/x-latex"),
    ContentType::new("application/x-lha"),
    ContentType::new("application/x-lyx"),
    ContentType::new("application/x-lzh"),
    ContentType::new("application/x-lzx"),
    ContentType::new("application/x-maker"),
    ContentType::new("application/x-ms-wmd"),
    ContentType::new("application/x-ms-wmz"),
    ContentType::new("application/x-msdos-program"),
    ContentType::new("application/x-msi"),
    ContentType::new("application/x-netcdf"),
    ContentType::new("application/x-ns-proxy-autoconfig"),
    ContentType::new("application/x-nwc"),
    ContentType::new("application/x-object"),
    ContentType::new("application/x-oz-application"),
    ContentType::new("application/x-pkcs7-certreqresp"),
    ContentType::new("application/x-pki-message"),
    ContentType::new("application/x-python-code"),
    ContentType::new("application/x-qgis"),
    ContentType::new("application/x-quicktimeplayer"),
    ContentType::new("application/x-rdp"),
    ContentType::new("application/x-redhat-package-manager"),
    ContentType::new("application/x-rss+xml"),
    ContentType::new("application/x-ruby"),
    ContentType::new("application/x-scilab"),
    ContentType::new("application/x-scilab-xcos"),
    ContentType::new("application/x-sh"),
    ContentType::new("application/x-shar"),
    ContentType::new("application/x-silverlight"),
    ContentType::new("application/x-stuffit"),
    ContentType::new("application/x-sv4cpio"),
    ContentType::new("application/x-sv4crc"),
    ContentType::new("application/x-tar"),
    ContentType::new("application/x-tcl"),
    ContentType::new("application/x-tex-gf"),
    ContentType::new("application/x-tex-pk"),
    ContentType::new("application/x-texinfo"),
    ContentType::new("application/x-trash"),
    ContentType::new("application/x-troff-man"),
    ContentType::new("application/x-troff-me"),
    ContentType::new("application/x-troff-ms"),
    ContentType::new("application/x-ustar"),
    ContentType::new("application/x-wais-source"),
    ContentType::new("application/x-wingz"),
    ContentType::new("application/x-www-form-urlencoded"),
    ContentType::new("application/x-x509-ca-cert"),
    ContentType::new("application/x-x509-ca-ra-cert"),
    ContentType::new("application/x-x509-next-ca-cert"),
    ContentType::new("application/x-xfig"),
    ContentType::new("application/x-xpinstall"),
    ContentType::new("application/x-xz"),
    ContentType::new("application/x400-bp"),
    ContentType::new("application/xacml+xml"),
    ContentType::new("application/xcap-att+xml"),
    ContentType::new("application/xcap-caps+xml"),
    ContentType::new("application/xcap-diff+xml"),
    ContentType::new("application/xcap-el+xml"),
    ContentType::new("application/xcap-error+xml"),
    ContentType::new("application/xcap-ns+xml"),
    ContentType::new("application/xcon-conference-info+xml"),
    ContentType::new("application/xcon-conference-info-diff+xml"),
    ContentType::new("application/xenc+xml"),
    ContentType::new("application/xfdf"),
    ContentType::new("application/xhtml+xml"),
    ContentType::new("application/xliff+xml"),
    ContentType::new("application/xml"),
    ContentType::new("application/xml-dtd"),
    ContentType::new("application/xml-external-parsed-entity"),
    ContentType::new("application/xml-patch+xml"),
    ContentType::new("application/xmpp+xml"),
    ContentType::new("application/xop+xml"),
    ContentType::new("application/xslt+xml"),
    ContentType::new("application/xspf+xml"),
    ContentType::new("application/xv+xml"),
    ContentType::new("application/yaml"),
    ContentType::new("application/yang"),
    ContentType::new("application/yang-data+cbor"),
    ContentType::new("application/yang-data+json"),
    ContentType::new("application/yang-data+xml"),
    ContentType::new("application/yang-patch+json"),
    ContentType::new("application/yang-patch+xml"),
    ContentType::new("application/yin+xml"),
    ContentType::new("application/zip"),
    ContentType::new("application/zlib"),
    ContentType::new("application/zstd"),
    ContentType::new("audio/*"),
    ContentType::new("audio/1d-interleaved-parityfec"),
    ContentType::new("audio/32kadpcm"),
    ContentType::new("audio/3gpp"),
    ContentType::new("audio/3gpp2"),
    ContentType::new("audio/aac"),
    ContentType::new("audio/ac3"),
    ContentType::new("audio/amr"),
    ContentType::new("audio/amr-wb"),
    ContentType::new("audio/amr-wb+"),
    ContentType::new("audio/annodex"),
    ContentType::new("audio/aptx"),
    ContentType::new("audio/asc"),
    ContentType::new("audio/atrac-advanced-lossless"),
    ContentType::new("audio/atrac-x"),
    ContentType::new("audio/atrac3"),
    ContentType::new("audio/basic"),
    ContentType::new("audio/bv16"),
    ContentType::new("audio/bv32"),
    ContentType::new("audio/clearmode"),
    ContentType::new("audio/cn"),
    ContentType::new("audio/csound"),
    ContentType::new("audio/dat12"),
    ContentType::new("audio/dls"),
    ContentType::new("audio/dsr-es201108"),
    ContentType::new("audio/dsr-es202050"),
    ContentType::new("audio/dsr-es202211"),
    ContentType::new("audio/dsr-es202212"),
    ContentType::new("audio/dv"),
    ContentType::new("audio/dvi4"),
    ContentType::new("audio/eac3"),
    ContentType::new("audio/encaprtp"),
    ContentType::new("audio/evrc"),
    ContentType::new("audio/evrc-qcp"),
    ContentType::new("audio/evrc0"),
    ContentType::new("audio/evrc1"),
    ContentType::new("audio/evrcb"),
    ContentType::new("audio/evrcb0"),
    ContentType::new("audio/evrcb1"),
    ContentType::new("audio/evrcnw"),
    ContentType::new("audio/evrcnw0"),
    ContentType::new("audio/evrcnw1"),
    ContentType::new("audio/evrcwb"),
    ContentType::new("audio/evrcwb0"),
    ContentType::new("audio/evrcwb1"),
    ContentType::new("audio/evs"),
    ContentType::new("audio/example"),
    ContentType::new("audio/flac"),
    ContentType::new("audio/flexfec"),
    ContentType::new("audio/fwdred"),
    ContentType::new("audio/g711-0"),
    ContentType::new("audio/g719"),
    ContentType::new("audio/g722"),
    ContentType::new("audio/g7221"),
    ContentType::new("audio/g723"),
    ContentType::new("audio/g726-16"),
    ContentType::new("audio/g726-24"),
    ContentType::new("audio/g726-32"),
    ContentType::new("audio/g726-40"),
    ContentType::new("audio/g728"),
    ContentType::new("audio/g729"),
    ContentType::new("audio/g7291"),
    ContentType::new("audio/g729d"),
    ContentType::new("audio/g729e"),
    ContentType::new("audio/gsm"),
    ContentType::new("audio/gsm-efr"),
    ContentType::new("audio/gsm-hr-08"),
    ContentType::new("audio/ilbc"),
    ContentType::new("audio/ip-mr_v2.5"),
    ContentType::new("audio/l16"),
    ContentType::new("audio/l20"),
    ContentType::new("audio/l24"),
    ContentType::new("audio/l8"),
    ContentType::new("audio/lpc"),
    ContentType::new("audio/melp"),
    ContentType::new("audio/melp1200"),
    ContentType::new("audio/melp2400"),
    ContentType::new("audio/melp600"),
    ContentType::new("audio/mhas"),
    ContentType::new("audio/mobile-xmf"),
    ContentType::new("audio/mp4"),
    ContentType::new("audio/mp4a-latm"),
    ContentType::new("audio/mpa"),
    ContentType::new("audio/mpa-robust"),
    ContentType::new("audio/mpeg"),
    ContentType::new("audio/mpeg4-generic"),
    ContentType::new("audio/mpegurl"),
    ContentType::new("audio/ogg"),
    ContentType::new("audio/opus"),
    ContentType::new("audio/parityfec"),
    ContentType::new("audio/pcma"),
    ContentType::new("audio/pcma-wb"),
    ContentType::new("audio/pcmu"),
    ContentType::new("audio/pcmu-wb"),
    ContentType::new("audio/prs.sid"),
    ContentType::new("audio/qcelp"),
    ContentType::new("audio/raptorfec"),
    ContentType::new("audio/red"),
    ContentType::new("audio/rtp-enc-aescm128"),
    ContentType::new("audio/rtp-midi"),
    ContentType::new("audio/rtploopback"),
    ContentType::new("audio/rtx"),
    ContentType::new("audio/scip"),
    ContentType::new("audio/smv"),
    ContentType::new("audio/smv-qcp"),
    ContentType::new("audio/smv0"),
    ContentType::new("audio/sofa"),
    ContentType::new("audio/sp-midi"),
    ContentType::new("audio/speex"),
    ContentType::new("audio/t140c"),
    ContentType::new("audio/t38"),
    ContentType::new("audio/telephone-event"),
    ContentType::new("audio/tetra_acelp"),
    ContentType::new("audio/tetra_acelp_bb"),
    ContentType::new("audio/tone"),
    ContentType::new("audio/tsvcis"),
    ContentType::new("audio/uemclip"),
    ContentType::new("audio/ulpfec"),
    ContentType::new("audio/usac"),
    ContentType::new("audio/vdvi"),
    ContentType::new("audio/vmr-wb"),
    ContentType::new("audio/vnd.3gpp.iufp"),
    ContentType::new("audio/vnd.4sb"),
    ContentType::new("audio/vnd.audiokoz"),
    ContentType::new("audio/vnd.celp"),
    ContentType::new("audio/vnd.cisco.nse"),
    ContentType::new("audio/vnd.cmles.radio-events"),
    ContentType::new("audio/vnd.cns.anp1"),
    ContentType::new("audio/vnd.cns.inf1"),
    ContentType::new("audio/vnd.dece.audio"),
    ContentType::new("audio/vnd.digital-winds"),
    ContentType::new("audio/vnd.dlna.adts"),
    ContentType::new("audio/vnd.dolby.heaac.1"),
    ContentType::new("audio/vnd.dolby.heaac.2"),
    ContentType::new("audio/vnd.dolby.mlp"),
    ContentType::new("audio/vnd.dolby.mps"),
    ContentType::new("audio/vnd.dolby.pl2"),
    ContentType::new("audio/vnd.dolby.pl2x"),
    ContentType::new("audio/vnd.dolby.pl2z"),
    ContentType::new("audio/vnd.dolby.pulse.1"),
    ContentType::new("audio/vnd.dra"),
    ContentType::new("audio/vnd.dts"),
    ContentType::new("audio/vnd.dts.hd"),
    ContentType::new("audio/vnd.dts.uhd"),
    ContentType::new("audio/vnd.dvb.file"),
    ContentType::new("audio/vnd.everad.plj"),
    ContentType::new("audio/vnd.hns.audio"),
    ContentType::new("audio/vnd.lucent.voice"),
    ContentType::new("audio/vnd.ms-playready.media.pya"),
    ContentType::new("audio/vnd.nokia.mobile-xmf"),
    ContentType::new("audio/vnd.nortel.vbk"),
    ContentType::new("audio/vnd.nuera.ecelp4800"),
    ContentType::new("audio/vnd.nuera.ecelp7470"),
    ContentType::new("audio/vnd.nuera.ecelp9600"),
    ContentType::new("audio/vnd.octel.sbc"),
    ContentType::new("audio/vnd.presonus.multitrack"),
    ContentType::new("audio/vnd.rhetorex.32kadpcm"),
    ContentType::new("audio/vnd.rip"),
    ContentType::new("audio/vnd.sealedmedia.softseal.mpeg"),
    ContentType::new("audio/vnd.vmx.cvsd"),
    ContentType::new("audio/vorbis"),
    ContentType::new("audio/vorbis-config"),
    ContentType::new("audio/x-aiff"),
    ContentType::new("audio/x-gsm"),
    ContentType::new("audio/x-ms-wax"),
    ContentType::new("audio/x-ms-wma"),
    ContentType::new("audio/x-pn-realaudio"),
    ContentType::new("audio/x-scpls"),
    ContentType::new("audio/x-sd2"),
    ContentType::new("audio/x-wav"),
    ContentType::new("font/*"),
    ContentType::new("font/collection"),
    ContentType::new("font/otf"),
    ContentType::new("font/sfnt"),
    ContentType::new("font/ttf"),
    ContentType::new("font/woff"),
    ContentType::new("font/woff2"),
    ContentType::new("image/*"),
    ContentType::new("image/aces"),
    ContentType::new("image/apng"),
    ContentType::new("image/avci"),
    ContentType::new("image/avcs"),
    ContentType::new("image/avif"),
    ContentType::new("image/bmp"),
    ContentType::new("image/cgm"),
    ContentType::new("image/dicom-rle"),
    ContentType::new("image/dpx"),
    ContentType::new("image/emf"),
    ContentType::new("image/example"),
    ContentType::new("image/fits"),
    ContentType::new("image/g3fax"),
    ContentType::new("image/gif"),
    ContentType::new("image/heic"),
    ContentType::new("image/heic-sequence"),
    ContentType::new("image/heif"),
    ContentType::new("image/heif-sequence"),
    ContentType::new("image/hej2k"),
    ContentType::new("image/hsj2"),
    ContentType::new("image/ief"),
    ContentType::new("image/jls"),
    ContentType::new("image/jp2"),
    ContentType::new("image/jpeg"),
    ContentType::new("image/jph"),
    ContentType::new("image/jphc"),
    ContentType::new("image/jpm"),
    ContentType::new("image/jpx"),
    ContentType::new("image/jxl"),
    ContentType::new("image/jxr"),
    ContentType::new("image/jxra"),
    ContentType::new("image/jxrs"),
    ContentType::new("image/jxs"),
    ContentType::new("image/jxsc"),
    ContentType::new("image/jxsi"),
    ContentType::new("image/jxss"),
    ContentType::new("image/ktx"),
    ContentType::new("image/ktx2"),
    ContentType::new("image/naplps"),
    ContentType::new("image/png"),
    ContentType::new("image/prs.btif"),
    ContentType::new("image/prs.pti"),
    ContentType::new("image/pwg-raster"),
    ContentType::new("image/svg+xml"),
    ContentType::new("image/t38"),
    ContentType::new("image/tiff"),
    ContentType::new("image/tiff-fx"),
    ContentType::new("image/vnd.adobe.photoshop"),
    ContentType::new("image/vnd.airzip.accelerator.azv"),
    ContentType::new("image/vnd.cns.inf2"),
    ContentType::new("image/vnd.dece.graphic"),
    ContentType::new("image/vnd.djvu"),
    ContentType::new("image/vnd.dvb.subtitle"),
    ContentType::new("image/vnd.dwg"),
    ContentType::new("image/vnd.dxf"),
    ContentType::new("image/vnd.fastbidsheet"),
    ContentType::new("image/vnd.fpx"),
    ContentType::new("image/vnd.fst"),
    ContentType::new("image/vnd.fujixerox.edmics-mmr"),
    ContentType::new("image/vnd.fujixerox.edmics-rlc"),
    ContentType::new("image/vnd.globalgraphics.pgb"),
    ContentType::new("image/vnd.microsoft.icon"),
    ContentType::new("image/vnd.mix"),
    ContentType::new("image/vnd.ms-modi"),
    ContentType::new("image/vnd.net-fpx"),
    ContentType::new("image/vnd.pco.b16"),
    ContentType::new("image/vnd.radiance"),
    ContentType::new("image/vnd.sealed.png"),
    ContentType::new("image/vnd.sealedmedia.softseal.gif"),
    ContentType::new("image/vnd.sealedmedia.softseal.jpg"),
    ContentType::new("image/vnd.svf"),
    ContentType::new("image/vnd.tencent.tap"),
    ContentType::new("image/vnd.valve.source.texture"),
    ContentType::new("image/vnd.wap.wbmp"),
    ContentType::new("image/vnd.xiff"),
    ContentType::new("image/vnd.zbrush.pcx"),
    ContentType::new("image/webp"),
    ContentType::new("image/wmf"),
    ContentType::new("image/x-canon-cr2"),
    ContentType::new("image/x-canon-crw"),
    ContentType::new("image/x-cmu-raster"),
    ContentType::new("image/x-coreldraw"),
    ContentType::new("image/x-coreldrawpattern"),
    ContentType::new("image/x-coreldrawtemplate"),
    ContentType::new("image/x-corelphotopaint"),
    ContentType::new("image/x-epson-erf"),
    ContentType::new("image/x-jg"),
    ContentType::new("image/x-jng"),
    ContentType::new("image/x-nikon-nef"),
    ContentType::new("image/x-olympus-orf"),
    ContentType::new("image/x-portable-anymap"),
    ContentType::new("image/x-portable-bitmap"),
    ContentType::new("image/x-portable-graymap"),
    ContentType::new("image/x-portable-pixmap"),
    ContentType::new("image/x-rgb"),
    ContentType::new("image/x-xbitmap"),
    ContentType::new("image/x-xcf"),
    ContentType::new("image/x-xpixmap"),
    ContentType::new("image/x-xwindowdump"),
    ContentType::new("message/*"),
    ContentType::new("message/bhttp"),
    ContentType::new("message/cpim"),
    ContentType::new("message/delivery-status"),
    ContentType::new("message/disposition-notification"),
    ContentType::new("message/example"),
    ContentType::new("message/external-body"),
    ContentType::new("message/feedback-report"),
    ContentType::new("message/global"),
    ContentType::new("message/global-delivery-status"),
    ContentType::new("message/global-disposition-notification"),
    ContentType::new("message/global-headers"),
    ContentType::new("message/http"),
    ContentType::new("message/imdn+xml"),
    ContentType::new("message/partial"),
    ContentType::new("message/rfc822"),
    ContentType::new("message/s-http"),
    ContentType::new("message/sip"),
    ContentType::new("message/sipfrag"),
    ContentType::new("message/tracking-status"),
    ContentType::new("message/vnd.wfa.wsc"),
    ContentType::new("model/*"),
    ContentType::new("model/3mf"),
    ContentType::new("model/e57"),
    ContentType::new("model/example"),
    ContentType::new("model/gltf+json"),
    ContentType::new("model/gltf-binary"),
    ContentType::new("model/iges"),
    ContentType::new("model/jt"),
    ContentType::new("model/mesh"),
    ContentType::new("model/mtl"),
    ContentType::new("model/obj"),
    ContentType::new("model/prc"),
    ContentType::new("model/step"),
    ContentType::new("model/step+xml"),
    ContentType::new("model/step+zip"),
    ContentType::new("model/step-xml+zip"),
    ContentType::new("model/stl"),
    ContentType::new("model/u3d"),
    ContentType::new("model/vnd.cld"),
    ContentType::new("model/vnd.collada+xml"),
    ContentType::new("model/vnd.dwf"),
    ContentType::new("model/vnd.flatland.3dml"),
    ContentType::new("model/vnd.gdl"),
    ContentType::new("model/vnd.gs-gdl"),
    ContentType::new("model/vnd.gtw"),
    ContentType::new("model/vnd.moml+xml"),
    ContentType::new("model/vnd.mts"),
    ContentType::new("model/vnd.opengex"),
    ContentType::new("model/vnd.parasolid.transmit.binary"),
    ContentType::new("model/vnd.parasolid.transmit.text"),
    ContentType::new("model/vnd.pytha.pyox"),
    ContentType::new("model/vnd.rosette.annotated-data-model"),
    ContentType::new("model/vnd.sap.vds"),
    ContentType::new("model/vnd.usda"),
    ContentType::new("model/vnd.usdz+zip"),
    ContentType::new("model/vnd.valve.source.compiled-map"),
    ContentType::new("model/vnd.vtu"),
    ContentType::new("model/vrml"),
    ContentType::new("model/x3d+fastinfoset"),
    ContentType::new("model/x3d+xml"),
    ContentType::new("model/x3d-vrml"),
    ContentType::new("multipart"),
    ContentType::new("multipart/alternative"),
    ContentType::new("multipart/appledouble"),
    ContentType::new("multipart/byteranges"),
    ContentType::new("multipart/digest"),
    ContentType::new("multipart/encrypted"),
    ContentType::new("multipart/example"),
    ContentType::new("multipart/form-data"),
    ContentType::new("multipart/header-set"),
    ContentType::new("multipart/mixed"),
    ContentType::new("multipart/multilingual"),
    ContentType::new("multipart/parallel"),
    ContentType::new("multipart/related"),
    ContentType::new("multipart/report"),
    ContentType::new("multipart/signed"),
    ContentType::new("multipart/vnd.bint.med-plus"),
    ContentType::new("multipart/voice-message"),
    ContentType::new("multipart/x-mixed-replace"),
    ContentType::new("text/*"),
    ContentType::new("text/1d-interleaved-parityfec"),
    ContentType::new("text/cache-manifest"),
    ContentType::new("text/calendar"),
    ContentType::new("text/cql"),
    ContentType::new("text/cql-extension"),
    ContentType::new("text/cql-identifier"),
    ContentType::new("text/css"),
    ContentType::new("text/csv"),
    ContentType::new("text/csv-schema"),
    ContentType::new("text/dns"),
    ContentType::new("text/encaprtp"),
    ContentType::new("text/enriched"),
    ContentType::new("text/example"),
    ContentType::new("text/fhirpath"),
    ContentType::new("text/flexfec"),
    ContentType::new("text/fwdred"),
    ContentType::new("text/gff3"),
    ContentType::new("text/grammar-ref-list"),
    ContentType::new("text/hl7v2"),
    ContentType::new("text/html"),
    ContentType::new("text/javascript"),
    ContentType::new("text/jcr-cnd"),
    ContentType::new("text/json"),
    ContentType::new("text/markdown"),
    ContentType::new("text/mizar"),
    ContentType::new("text/n3"),
    ContentType::new("text/parameters"),
    ContentType::new("text/parityfec"),
    ContentType::new("text/plain"),
    ContentType::new("text/provenance-notation"),
    ContentType::new("text/prs.fallenstein.rst"),
    ContentType::new("text/prs.lines.tag"),
    ContentType::new("text/prs.prop.logic"),
    ContentType::new("text/raptorfec"),
    ContentType::new("text/red"),
    ContentType::new("text/rfc822-headers"),
    ContentType::new("text/rtf"),
    ContentType::new("text/rtp-enc-aescm128"),
    ContentType::new("text/rtploopback"),
    ContentType::new("text/rtx"),
    ContentType::new("text/sgml"),
    ContentType::new("text/shaclc"),
    ContentType::new("text/shex"),
    ContentType::new("text/spdx"),
    ContentType::new("text/strings"),
    ContentType::new("text/t140"),
    ContentType::new("text/tab-separated-values"),
    ContentType::new("text/texmacs"),
    ContentType::new("text/troff"),
    ContentType::new("text/turtle"),
    ContentType::new("text/ulpfec"),
    ContentType::new("text/uri-list"),
    ContentType::new("text/vcard"),
    ContentType::new("text/vnd.a"),
    ContentType::new("text/vnd.abc"),
    ContentType::new("text/vnd.ascii-art"),
    ContentType::new("text/vnd.curl"),
    ContentType::new("text/vnd.debian.copyright"),
    ContentType::new("text/vnd.dmclientscript"),
    ContentType::new("text/vnd.dvb.subtitle"),
    ContentType::new("text/vnd.esmertec.theme-descriptor"),
    ContentType::new("text/vnd.exchangeable"),
    ContentType::new("text/vnd.familysearch.gedcom"),
    ContentType::new("text/vnd.ficlab.flt"),
    ContentType::new("text/vnd.fly"),
    ContentType::new("text/vnd.fmi.flexstor"),
    ContentType::new("text/vnd.gml"),
    ContentType::new("text/vnd.graphviz"),
    ContentType::new("text/vnd.hans"),
    ContentType::new("text/vnd.hgl"),
    ContentType::new("text/vnd.in3d.3dml"),
    ContentType::new("text/vnd.in3d.spot"),
    ContentType::new("text/vnd.iptc.newsml"),
    ContentType::new("text/vnd.iptc.nitf"),
    ContentType::new("text/vnd.latex-z"),
    ContentType::new("text/vnd.motorola.reflex"),
    ContentType::new("text/vnd.ms-mediapackage"),
    ContentType::new("text/vnd.net2phone.commcenter.command"),
    ContentType::new("text/vnd.radisys.msml-basic-layout"),
    ContentType::new("text/vnd.senx.warpscript"),
    ContentType::new("text/vnd.sosi"),
    ContentType::new("text/vnd.sun.j2me.app-descriptor"),
    ContentType::new("text/vnd.trolltech.linguist"),
    ContentType::new("text/vnd.wap.si"),
    ContentType::new("text/vnd.wap.sl"),
    ContentType::new("text/vnd.wap.wml"),
    ContentType::new("text/vnd.wap.wmlscript"),
    ContentType::new("text/vtt"),
    ContentType::new("text/wgsl"),
    ContentType::new("text/x-bibtex"),
    ContentType::new("text/x-boo"),
    ContentType::new("text/x-c++hdr"),
    ContentType::new("text/x-c++src"),
    ContentType::new("text/x-chdr"),
    ContentType::new("text/x-component"),
    ContentType::new("text/x-csh"),
    ContentType::new("text/x-csrc"),
    ContentType::new("text/x-diff"),
    ContentType::new("text/x-dsrc"),
    ContentType::new("text/x-haskell"),
    ContentType::new("text/x-java"),
    ContentType::new("text/x-lilypond"),
    ContentType::new("text/x-literate-haskell"),
    ContentType::new("text/x-moc"),
    ContentType::new("text/x-pascal"),
    ContentType::new("text/x-pcs-gcd"),
    ContentType::new("text/x-perl"),
    ContentType::new("text/x-python"),
    ContentType::new("text/x-scala"),
    ContentType::new("text/x-setext"),
    ContentType::new("text/x-sfv"),
    ContentType::new("text/x-sh"),
    ContentType::new("text/x-tcl"),
    ContentType::new("text/x-tex"),
    ContentType::new("text/x-vcalendar"),
    ContentType::new("text/xml"),
    ContentType::new("text/xml-dtd"),
    ContentType::new("text/xml-external-parsed-entity"),
    ContentType::new("video/*"),
    ContentType::new("video/1d-interleaved-parityfec"),
    ContentType::new("video/3gpp"),
    ContentType::new("video/3gpp-tt"),
    ContentType::new("video/3gpp2"),
    ContentType::new("video/annodex"),
    ContentType::new("video/av1"),
    ContentType::new("video/bmpeg"),
    ContentType::new("video/bt656"),
    ContentType::new("video/celb"),
    ContentType::new("video/dv"),
    ContentType::new("video/encaprtp"),
    ContentType::new("video/example"),
    ContentType::new("video/ffv1"),
    ContentType::new("video/flexfec"),
    ContentType::new("video/fli"),
    ContentType::new("video/gl"),
    ContentType::new("video/h261"),
    ContentType::new("video/h263"),
    ContentType::new("video/h263-1998"),
    ContentType::new("video/h263-2000"),
    ContentType::new("video/h264"),
    ContentType::new("video/h264-rcdo"),
    ContentType::new("video/h264-svc"),
    ContentType::new("video/h265"),
    ContentType::new("video/h266"),
    ContentType::new("video/iso.segment"),
    ContentType::new("video/jpeg"),
    ContentType::new("video/jpeg2000"),
    ContentType::new("video/jxsv"),
    ContentType::new("video/mj2"),
    ContentType::new("video/mp1s"),
    ContentType::new("video/mp2p"),
    ContentType::new("video/mp2t"),
    ContentType::new("video/mp4"),
    ContentType::new("video/mp4v-es"),
    ContentType::new("video/mpeg"),
    ContentType::new("video/mpeg4-generic"),
    ContentType::new("video/mpv"),
    ContentType::new("video/nv"),
    ContentType::new("video/ogg"),
    ContentType::new("video/parityfec"),
    ContentType::new("video/pointer"),
    ContentType::new("video/quicktime"),
    ContentType::new("video/raptorfec"),
    ContentType::new("video/raw"),
    ContentType::new("video/rtp-enc-aescm128"),
    ContentType::new("video/rtploopback"),
    ContentType::new("video/rtx"),
    ContentType::new("video/scip"),
    ContentType::new("video/smpte291"),
    ContentType::new("video/smpte292m"),
    ContentType::new("video/ulpfec"),
    ContentType::new("video/vc1"),
    ContentType::new("video/vc2"),
    ContentType::new("video/vnd.cctv"),
    ContentType::new("video/vnd.dece.hd"),
    ContentType::new("video/vnd.dece.mobile"),
    ContentType::new("video/vnd.dece.mp4"),
    ContentType::new("video/vnd.dece.pd"),
    ContentType::new("video/vnd.dece.sd"),
    ContentType::new("video/vnd.dece.video"),
    ContentType::new("video/vnd.directv.mpeg"),
    ContentType::new("video/vnd.directv.mpeg-tts"),
    ContentType::new("video/vnd.dlna.mpeg-tts"),
    ContentType::new("video/vnd.dvb.file"),
    ContentType::new("video/vnd.fvt"),
    ContentType::new("video/vnd.hns.video"),
    ContentType::new("video/vnd.iptvforum.1dparityfec-1010"),
    ContentType::new("video/vnd.iptvforum.1dparityfec-2005"),
    ContentType::new("video/vnd.iptvforum.2dparityfec-1010"),
    ContentType::new("video/vnd.iptvforum.2dparityfec-2005"),
    ContentType::new("video/vnd.iptvforum.ttsavc"),
    ContentType::new("video/vnd.iptvforum.ttsmpeg2"),
    ContentType::new("video/vnd.motorola.video"),
    ContentType::new("video/vnd.motorola.videop"),
    ContentType::new("video/vnd.mpegurl"),
    ContentType::new("video/vnd.ms-playready.media.pyv"),
    ContentType::new("video/vnd.nokia.interleaved-multimedia"),
    ContentType::new("video/vnd.nokia.mp4vr"),
    ContentType::new("video/vnd.nokia.videovoip"),
    ContentType::new("video/vnd.objectvideo"),
    ContentType::new("video/vnd.radgamettools.bink"),
    ContentType::new("video/vnd.radgamettools.smacker"),
    ContentType::new("video/vnd.sealed.mpeg1"),
    ContentType::new("video/vnd.sealed.mpeg4"),
    ContentType::new("video/vnd.sealed.swf"),
    ContentType::new("video/vnd.sealedmedia.softseal.mov"),
    ContentType::new("video/vnd.uvvu.mp4"),
    ContentType::new("video/vnd.vivo"),
    ContentType::new("video/vnd.youtube.yt"),
    ContentType::new("video/vp8"),
    ContentType::new("video/vp9"),
    ContentType::new("video/webm"),
    ContentType::new("video/x-flv"),
    ContentType::new("video/x-la-asf"),
    ContentType::new("video/x-matroska"),
    ContentType::new("video/x-mng"),
    ContentType::new("video/x-ms-wm"),
    ContentType::new("video/x-ms-wmv"),
    ContentType::new("video/x-ms-wmx"),
    ContentType::new("video/x-ms-wvx"),
    ContentType::new("video/x-msvideo"),
    ContentType::new("video/x-sgi-movie"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::enums::Vocabulary;

    #[test]
    fn test_table_is_sorted_lowercase_and_unique() {
        for pair in MEDIA_TYPES.windows(2) {
            assert!(pair[0].as_str() < pair[1].as_str(), "{} >= {}", pair[0], pair[1]);
        }
        for media_type in MEDIA_TYPES {
            assert_eq!(media_type.as_str(), media_type.as_str().to_ascii_lowercase());
        }
    }
}
